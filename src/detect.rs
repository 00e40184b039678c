// Cosmic ray (outlier) detection.
//
// Each pixel is compared against the median of its 5x5 neighbourhood (the
// pixel itself excluded, borders reflected). The pixel is flagged when its
// absolute deviation from that median exceeds
//
//     threshold + NOISE_SIGMAS * (MAD_TO_SIGMA * mad + SCALE_FLOOR)
//
// where mad is the neighbourhood's median absolute deviation. `threshold` is
// an additive term, not a multiplier on the noise scale: it is the deviation,
// in normalized intensity units, a pixel must clear in a perfectly flat
// neighbourhood, and local texture raises the bar on top of it through the
// MAD term. Halving `threshold` therefore lowers the limit by a fixed amount
// rather than halving it. The limit grows strictly with `threshold`, so
// lowering it can only add flagged pixels.
//
// Every pixel reads only the input buffer, so rows are independent and may be
// evaluated in any order (or in parallel with the `rayon` feature).

use crate::{
    error::{self, CleanError},
    imagebuffer::ImageBuffer,
    mask::Mask,
    neighborhood::Neighborhood,
    stats,
};
use log::debug;
use std::time::Instant;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

pub const DEFAULT_THRESHOLD: f32 = 0.15;

// 5x5 window. A 3x3 window cannot see past the ring of a 3x3 defect cluster.
pub const DETECTION_RADIUS: usize = 2;

pub const NOISE_SIGMAS: f32 = 3.0;

// Keeps perfectly flat neighbourhoods from having a zero noise scale
pub const SCALE_FLOOR: f32 = 1e-3;

pub fn validate_threshold(threshold: f32) -> error::Result<()> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(CleanError::InvalidParameter {
            name: "threshold",
            value: threshold,
        });
    }
    Ok(())
}

// The deviation a pixel must exceed given its neighbourhood's MAD
pub fn deviation_limit(threshold: f32, mad: f32) -> f32 {
    threshold + NOISE_SIGMAS * (stats::robust_sigma(mad) + SCALE_FLOOR)
}

// `window` is scratch space, overwritten on every call.
fn is_outlier_with(
    buffer: &ImageBuffer,
    x: usize,
    y: usize,
    threshold: f32,
    window: &mut Vec<f32>,
) -> bool {
    let neighborhood = Neighborhood::new(buffer.width, buffer.height, x, y, DETECTION_RADIUS);
    neighborhood.gather_into(&buffer.buffer, window);

    // No usable neighbours (e.g. a 1x1 image): nothing to compare against.
    match stats::median_and_mad_mut(window) {
        Some((m, mad)) => (buffer.get(x, y) - m).abs() > deviation_limit(threshold, mad),
        None => false,
    }
}

pub fn is_outlier(buffer: &ImageBuffer, x: usize, y: usize, threshold: f32) -> bool {
    let mut window: Vec<f32> = Vec::new();
    is_outlier_with(buffer, x, y, threshold, &mut window)
}

fn detect_row(buffer: &ImageBuffer, y: usize, threshold: f32, row: &mut [bool]) {
    let side = 2 * DETECTION_RADIUS + 1;
    let mut window: Vec<f32> = Vec::with_capacity(side * side - 1);
    row.iter_mut().enumerate().for_each(|(x, flag)| {
        *flag = is_outlier_with(buffer, x, y, threshold, &mut window);
    });
}

#[cfg_attr(feature = "rayon", allow(dead_code))]
fn detect_rows_serial(buffer: &ImageBuffer, threshold: f32, flags: &mut [bool]) {
    flags
        .chunks_mut(buffer.width)
        .enumerate()
        .for_each(|(y, row)| detect_row(buffer, y, threshold, row));
}

#[cfg(feature = "rayon")]
fn detect_rows_parallel(buffer: &ImageBuffer, threshold: f32, flags: &mut [bool]) {
    flags
        .par_chunks_mut(buffer.width)
        .enumerate()
        .for_each(|(y, row)| detect_row(buffer, y, threshold, row));
}

fn detect_rows(buffer: &ImageBuffer, threshold: f32, flags: &mut [bool]) {
    #[cfg(feature = "rayon")]
    detect_rows_parallel(buffer, threshold, flags);

    #[cfg(not(feature = "rayon"))]
    detect_rows_serial(buffer, threshold, flags);
}

pub fn detect(buffer: &ImageBuffer, threshold: f32) -> error::Result<Mask> {
    validate_threshold(threshold)?;

    let mut mask = Mask::new(buffer.width, buffer.height);
    if buffer.is_empty() {
        return Ok(mask);
    }

    let detect_start = Instant::now();
    detect_rows(buffer, threshold, &mut mask.flags);

    debug!(
        "Flagged {} of {} pixels ({}x{}, threshold {}) in {:?}",
        mask.count_flagged(),
        mask.len(),
        buffer.width,
        buffer.height,
        threshold,
        detect_start.elapsed()
    );
    Ok(mask)
}

pub fn detect_default(buffer: &ImageBuffer) -> error::Result<Mask> {
    detect(buffer, DEFAULT_THRESHOLD)
}
