use crate::imagebuffer::ImageBuffer;

pub const UPSCALE_FACTOR: usize = 2;
pub const SHARPEN_STRENGTH: f32 = 0.45;

// Samples at fractional coordinates, clamping the far neighbours to the
// nearest valid pixel at the right and bottom edges.
fn get_interpolated(buffer: &ImageBuffer, x: f32, y: f32) -> f32 {
    let xf = x.floor() as usize;
    let yf = y.floor() as usize;
    let xc = (xf + 1).min(buffer.width - 1);
    let yc = (yf + 1).min(buffer.height - 1);

    let xd = x - xf as f32;
    let yd = y - yf as f32;

    let v00 = buffer.get(xf, yf);
    let v01 = buffer.get(xc, yf);
    let v10 = buffer.get(xf, yc);
    let v11 = buffer.get(xc, yc);

    let v0 = v10 * yd + v00 * (1.0 - yd);
    let v1 = v11 * yd + v01 * (1.0 - yd);
    v1 * xd + v0 * (1.0 - xd)
}

// Maps destination coordinate `d` of `to_len` onto source `from_len` so the
// first and last samples line up.
fn source_coordinate(d: usize, from_len: usize, to_len: usize) -> f32 {
    if to_len <= 1 {
        0.0
    } else {
        d as f32 / (to_len - 1) as f32 * (from_len - 1) as f32
    }
}

pub fn upscale(buffer: &ImageBuffer, factor: usize) -> ImageBuffer {
    if buffer.is_empty() {
        return ImageBuffer::new_empty();
    }
    let to_width = buffer.width * factor;
    let to_height = buffer.height * factor;
    let mut upscaled = ImageBuffer::new(to_width, to_height);

    for y in 0..to_height {
        let gy = source_coordinate(y, buffer.height, to_height);
        for x in 0..to_width {
            let gx = source_coordinate(x, buffer.width, to_width);
            upscaled.put(x, y, get_interpolated(buffer, gx, gy));
        }
    }
    upscaled
}

// 4-neighbour Laplacian sharpen of the interior, clamped to [0, 1]. The
// outermost ring is passed through.
pub fn sharpen(buffer: &ImageBuffer, strength: f32) -> ImageBuffer {
    let mut sharpened = buffer.clone();
    if buffer.width < 3 || buffer.height < 3 {
        return sharpened;
    }

    for y in 1..buffer.height - 1 {
        for x in 1..buffer.width - 1 {
            let center = buffer.get(x, y);
            let laplacian = 4.0 * center
                - buffer.get(x, y - 1)
                - buffer.get(x, y + 1)
                - buffer.get(x - 1, y)
                - buffer.get(x + 1, y);
            sharpened.put(x, y, (center + laplacian * strength).clamp(0.0, 1.0));
        }
    }
    sharpened
}

// 2x upscale followed by sharpening, for viewing a cleaned frame
pub fn enhance(buffer: &ImageBuffer) -> ImageBuffer {
    sharpen(&upscale(buffer, UPSCALE_FACTOR), SHARPEN_STRENGTH)
}
