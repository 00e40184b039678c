use itertools::iproduct;

// Mirrors an out-of-range coordinate back into [0, n), repeating the edge
// sample: for n = 5, -1 -> 0, -2 -> 1, 5 -> 4, 6 -> 3. The reflection is
// periodic with period 2 * n so any offset lands in range.
pub fn reflect_index(i: i64, n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let n = n as i64;
    let period = 2 * n;
    let m = i.rem_euclid(period);
    if m >= n {
        (period - 1 - m) as usize
    } else {
        m as usize
    }
}

// The square window of offsets around a pixel, excluding the pixel itself,
// resolved to flat buffer indices with reflection at the borders. Offsets
// that reflect back onto the centre (the mirrored step past the edge for a
// border pixel, or wraps on images narrower than the window) are skipped, so a
// border pixel sees slightly fewer samples than an interior one but never its
// own value.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    radius: usize,
}

impl Neighborhood {
    pub fn new(width: usize, height: usize, x: usize, y: usize, radius: usize) -> Neighborhood {
        if x >= width || y >= height {
            panic!("Invalid pixel coordinates: ({}, {})", x, y);
        }
        Neighborhood {
            width,
            height,
            x,
            y,
            radius,
        }
    }

    // Number of offsets in the window, not counting the centre
    pub fn window_len(&self) -> usize {
        let side = 2 * self.radius + 1;
        side * side - 1
    }

    pub fn center_index(&self) -> usize {
        self.y * self.width + self.x
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        let r = self.radius as i64;
        let center = self.center_index();
        iproduct!(-r..=r, -r..=r)
            .filter(|&(dy, dx)| dx != 0 || dy != 0)
            .map(move |(dy, dx)| {
                let nx = reflect_index(self.x as i64 + dx, self.width);
                let ny = reflect_index(self.y as i64 + dy, self.height);
                ny * self.width + nx
            })
            .filter(move |&idx| idx != center)
    }

    // Replaces the contents of `window` with the samples from `values` at
    // every neighbour index. Lets per-pixel scans reuse one allocation.
    pub fn gather_into(&self, values: &[f32], window: &mut Vec<f32>) {
        window.clear();
        window.extend(self.indices().map(|idx| values[idx]));
    }

    pub fn gather(&self, values: &[f32]) -> Vec<f32> {
        let mut v: Vec<f32> = Vec::with_capacity(self.window_len());
        self.gather_into(values, &mut v);
        v
    }

    // Samples from `values` at neighbour indices not flagged in `flags`
    pub fn gather_unflagged(&self, values: &[f32], flags: &[bool]) -> Vec<f32> {
        let mut v: Vec<f32> = Vec::with_capacity(self.window_len());
        v.extend(
            self.indices()
                .filter(|&idx| !flags[idx])
                .map(|idx| values[idx]),
        );
        v
    }
}
