#![allow(dead_code, unused_imports)]

use crclean::prelude::*;

pub const DEFAULT_DELTA: f32 = 0.0001;

pub const BACKGROUND: f32 = 0.2;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn flat(width: usize, height: usize, value: f32) -> ImageBuffer {
    ImageBuffer::new_with_fill(width, height, value)
}

pub fn with_spike(width: usize, height: usize, x: usize, y: usize, spike: f32) -> ImageBuffer {
    let mut buffer = flat(width, height, BACKGROUND);
    buffer.put(x, y, spike);
    buffer
}

// Square block of `value` with its top left corner at (left, top)
pub fn with_block(
    width: usize,
    height: usize,
    left: usize,
    top: usize,
    size: usize,
    value: f32,
) -> ImageBuffer {
    let mut buffer = flat(width, height, BACKGROUND);
    for y in top..top + size {
        for x in left..left + size {
            buffer.put(x, y, value);
        }
    }
    buffer
}

// Smoothly textured frame with low amplitude ripple and a few hot pixels.
// Deterministic so threshold sweeps are repeatable.
pub fn textured(width: usize, height: usize) -> ImageBuffer {
    let mut buffer = ImageBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let ripple = 0.04 * ((x as f32 * 0.7).sin() + (y as f32 * 1.3).cos());
            let grain = 0.01 * (((x * 31 + y * 17) % 7) as f32 - 3.0) / 3.0;
            buffer.put(x, y, 0.4 + ripple + grain);
        }
    }
    buffer.put(3, 4, 0.98);
    buffer.put(10, 2, 0.75);
    buffer.put(width - 1, height - 1, 0.9);
    buffer.put(7, 9, 0.62);
    buffer
}
