/// Rounds to `decimals` places on the exact binary value, ties to even.
///
/// Goes through the float formatter, which rounds correctly; scaling by a
/// power of ten first would pick up representation error.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let places = decimals.max(0) as usize;
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// `ceil(count * percent / 100)`, never below one.
pub fn share_rounded_up(count: usize, percent: usize) -> usize {
    (count * percent).div_ceil(100).max(1)
}
