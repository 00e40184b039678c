use crate::error::{self, CleanError};
use crate::imagebuffer::ImageBuffer;

// Per-pixel defect flags, same dimensions and layout as the ImageBuffer they
// were derived from. `true` marks a defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pub flags: Vec<bool>,
    pub width: usize,
    pub height: usize,
}

impl Mask {
    // All-clear mask
    pub fn new(width: usize, height: usize) -> Mask {
        Mask::new_with_fill(width, height, false)
    }

    pub fn new_with_fill(width: usize, height: usize, fill_value: bool) -> Mask {
        Mask {
            flags: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn from_vec(v: Vec<bool>, width: usize, height: usize) -> error::Result<Mask> {
        if v.len() != width * height {
            return Err(CleanError::LengthMismatch {
                expected: width * height,
                actual: v.len(),
            });
        }
        Ok(Mask {
            flags: v,
            width,
            height,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn same_dimensions_as(&self, buffer: &ImageBuffer) -> bool {
        self.dimensions() == buffer.dimensions()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            panic!("Invalid pixel coordinates: ({}, {})", x, y);
        }
        self.flags[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, flagged: bool) {
        if x >= self.width || y >= self.height {
            panic!("Invalid pixel coordinates: ({}, {})", x, y);
        }
        self.flags[y * self.width + x] = flagged;
    }

    pub fn count_flagged(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    // Fraction of pixels flagged. An empty mask reports zero.
    pub fn flagged_ratio(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.count_flagged() as f32 / self.len() as f32
        }
    }

    // True when nothing is flagged
    pub fn is_clear(&self) -> bool {
        !self.flags.iter().any(|&f| f)
    }

    // Flagged pixel coordinates in raster order
    pub fn flagged_points(&self) -> Vec<(usize, usize)> {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, &f)| f)
            .map(|(i, _)| (i % self.width, i / self.width))
            .collect()
    }
}
