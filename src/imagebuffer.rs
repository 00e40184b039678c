use crate::error::{self, CleanError};

// A single-plane intensity raster. Values are nominally normalized to [0, 1]
// but nothing here enforces that.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub buffer: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f32,
    pub max: f32,
}

impl ImageBuffer {
    // Creates a new image buffer of the requested width and height, zero filled
    pub fn new(width: usize, height: usize) -> ImageBuffer {
        ImageBuffer::new_with_fill(width, height, 0.0)
    }

    pub fn new_with_fill(width: usize, height: usize, fill_value: f32) -> ImageBuffer {
        ImageBuffer {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn new_empty() -> ImageBuffer {
        ImageBuffer {
            buffer: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    // Creates a new image buffer at the requested width, height and data
    pub fn from_vec(v: Vec<f32>, width: usize, height: usize) -> error::Result<ImageBuffer> {
        if v.len() != width * height {
            return Err(CleanError::LengthMismatch {
                expected: width * height,
                actual: v.len(),
            });
        }

        Ok(ImageBuffer {
            buffer: v,
            width,
            height,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn same_dimensions_as(&self, other: &ImageBuffer) -> bool {
        self.dimensions() == other.dimensions()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn index_of(&self, x: usize, y: usize) -> usize {
        if x >= self.width || y >= self.height {
            panic!("Invalid pixel coordinates: ({}, {})", x, y);
        }
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.buffer[self.index_of(x, y)]
    }

    pub fn put(&mut self, x: usize, y: usize, val: f32) {
        let index = self.index_of(x, y);
        self.buffer[index] = val;
    }

    pub fn get_min_max(&self) -> Option<MinMax> {
        if self.is_empty() {
            return None;
        }

        let mut mx: f32 = f32::MIN;
        let mut mn: f32 = f32::MAX;

        self.buffer.iter().for_each(|&val| {
            mx = if val > mx { val } else { mx };
            mn = if val < mn { val } else { mn };
        });

        Some(MinMax { min: mn, max: mx })
    }
}
