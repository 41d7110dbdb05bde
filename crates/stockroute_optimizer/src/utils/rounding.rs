/// Rounds the exact binary value to the given number of decimals, ties to even.
///
/// `0.125` is exactly representable and rounds to `0.12`, while `2.675` is stored
/// slightly below the midpoint and rounds to `2.67`.
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // Fixed precision formatting rounds the exact value correctly.
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
