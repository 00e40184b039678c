// Scale factor taking a median absolute deviation to a standard deviation
// estimate for normally distributed data.
pub const MAD_TO_SIGMA: f32 = 1.4826;

// Drops non-finite samples and sorts what remains, in place.
fn retain_finite_sorted(values: &mut Vec<f32>) {
    values.retain(|p| p.is_finite());
    values.sort_unstable_by(|a, b| a.total_cmp(b));
}

// Median of already sorted, finite samples. Even-length inputs average the
// two middle values.
fn median_of_sorted(sorted: &[f32]) -> Option<f32> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

// Median of `values`, reordering them and dropping non-finite samples.
pub fn median_mut(values: &mut Vec<f32>) -> Option<f32> {
    retain_finite_sorted(values);
    median_of_sorted(values)
}

// Non-finite samples are ignored.
pub fn median(data: &[f32]) -> Option<f32> {
    median_mut(&mut data.to_vec())
}

// Median and median absolute deviation computed in the caller's buffer, which
// is left holding the sorted absolute deviations. Detection calls this once
// per pixel with a reused scratch vector.
pub fn median_and_mad_mut(values: &mut Vec<f32>) -> Option<(f32, f32)> {
    let m = median_mut(values)?;
    values.iter_mut().for_each(|p| *p = (*p - m).abs());
    values.sort_unstable_by(|a, b| a.total_cmp(b));
    let mad = median_of_sorted(values)?;
    Some((m, mad))
}

pub fn median_and_mad(data: &[f32]) -> Option<(f32, f32)> {
    median_and_mad_mut(&mut data.to_vec())
}

// Standard deviation estimate from a median absolute deviation
pub fn robust_sigma(mad: f32) -> f32 {
    mad * MAD_TO_SIGMA
}
