//! Helpers for long sample series.

/// Pick at most `max_points` evenly spaced indices into a series of `len`
/// samples. The first and last samples are always included.
///
/// A one-second integration step over two weeks yields over a million
/// samples; a chart only needs a few thousand of them.
pub fn decimate(len: usize, max_points: usize) -> Vec<usize> {
    if len == 0 || max_points == 0 {
        return Vec::new();
    }
    if len <= max_points {
        return (0..len).collect();
    }
    if max_points == 1 {
        return vec![len - 1];
    }

    let last = len - 1;
    let intervals = max_points - 1;
    let mut indices: Vec<usize> = (0..max_points)
        .map(|k| ((k as u128 * last as u128) / intervals as u128) as usize)
        .collect();
    indices.dedup();
    indices
}
