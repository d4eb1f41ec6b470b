use crate::error::InvalidRange;

/// Sums `i * i` for every `i` in `start..=end`.
///
/// Squares are widened to `i128` before summing, which holds the sum over the
/// whole `i32` range.
pub fn sum_of_squares_in_range(start: i32, end: i32) -> Result<i128, InvalidRange> {
    if end < start {
        return Err(InvalidRange { start, end });
    }
    Ok((start..=end).map(i128::from).map(|x| x * x).sum())
}
