// Neighbourhood repair of flagged pixels.
//
// A flagged pixel takes the median of the unflagged pixels around it. The
// search starts with the 3x3 window and widens one ring at a time up to
// MAX_REPAIR_RADIUS; the first radius yielding any unflagged sample wins.
// Pixels still unresolved after that take the median of every unflagged pixel
// in the image. Unflagged pixels are copied through untouched.
//
// All replacement values are computed from the input buffer before any are
// written, so the result does not depend on visiting order.

use crate::{
    check_dimensions,
    error,
    imagebuffer::ImageBuffer,
    mask::Mask,
    neighborhood::Neighborhood,
    stats,
};
use log::{debug, warn};
use std::time::Instant;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

pub const MIN_REPAIR_RADIUS: usize = 1;
pub const MAX_REPAIR_RADIUS: usize = 8;

// Median of the unflagged neighbours at the smallest radius that has any,
// or None if the whole 17x17 window is flagged.
pub fn local_replacement(buffer: &ImageBuffer, mask: &Mask, x: usize, y: usize) -> Option<f32> {
    (MIN_REPAIR_RADIUS..=MAX_REPAIR_RADIUS).find_map(|radius| {
        let neighborhood = Neighborhood::new(buffer.width, buffer.height, x, y, radius);
        let window = neighborhood.gather_unflagged(&buffer.buffer, &mask.flags);
        stats::median(&window)
    })
}

// Median of every unflagged pixel in the image
pub fn global_replacement(buffer: &ImageBuffer, mask: &Mask) -> Option<f32> {
    let clean: Vec<f32> = buffer
        .buffer
        .iter()
        .zip(mask.flags.iter())
        .filter(|(_, &flagged)| !flagged)
        .map(|(&v, _)| v)
        .collect();
    stats::median(&clean)
}

fn repair_row(buffer: &ImageBuffer, mask: &Mask, y: usize, row: &mut [Option<f32>]) {
    row.iter_mut().enumerate().for_each(|(x, replacement)| {
        if mask.get(x, y) {
            *replacement = local_replacement(buffer, mask, x, y);
        }
    });
}

#[cfg_attr(feature = "rayon", allow(dead_code))]
fn repair_rows_serial(buffer: &ImageBuffer, mask: &Mask, replacements: &mut [Option<f32>]) {
    replacements
        .chunks_mut(buffer.width)
        .enumerate()
        .for_each(|(y, row)| repair_row(buffer, mask, y, row));
}

#[cfg(feature = "rayon")]
fn repair_rows_parallel(buffer: &ImageBuffer, mask: &Mask, replacements: &mut [Option<f32>]) {
    replacements
        .par_chunks_mut(buffer.width)
        .enumerate()
        .for_each(|(y, row)| repair_row(buffer, mask, y, row));
}

fn repair_rows(buffer: &ImageBuffer, mask: &Mask, replacements: &mut [Option<f32>]) {
    #[cfg(feature = "rayon")]
    repair_rows_parallel(buffer, mask, replacements);

    #[cfg(not(feature = "rayon"))]
    repair_rows_serial(buffer, mask, replacements);
}

pub fn repair(buffer: &ImageBuffer, mask: &Mask) -> error::Result<ImageBuffer> {
    check_dimensions!(buffer.dimensions(), mask.dimensions());

    if buffer.is_empty() || mask.is_clear() {
        return Ok(buffer.clone());
    }

    let repair_start = Instant::now();

    let mut replacements: Vec<Option<f32>> = vec![None; buffer.len()];
    repair_rows(buffer, mask, &mut replacements);

    let unresolved = mask
        .flags
        .iter()
        .zip(replacements.iter())
        .filter(|(&flagged, r)| flagged && r.is_none())
        .count();

    let fallback = if unresolved > 0 {
        let global = global_replacement(buffer, mask);
        if global.is_none() {
            warn!(
                "No unflagged pixels to repair from, leaving {} pixels unchanged",
                unresolved
            );
        }
        global
    } else {
        None
    };

    let mut repaired = buffer.clone();
    repaired
        .buffer
        .iter_mut()
        .zip(mask.flags.iter().zip(replacements.iter()))
        .filter(|(_, (&flagged, _))| flagged)
        .for_each(|(value, (_, replacement))| {
            if let Some(v) = replacement.or(fallback) {
                *value = v;
            }
        });

    debug!(
        "Repaired {} pixels ({} from global fallback) in {:?}",
        mask.count_flagged(),
        unresolved,
        repair_start.elapsed()
    );

    assert!(repaired.same_dimensions_as(buffer));
    Ok(repaired)
}
