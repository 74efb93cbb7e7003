/// Asserts that a numerical value is in the provided interval `[a,b]` and panics
/// with a helpful message if not
///
/// ### Example
/// ```ignore
/// let value = 2.0;
/// assert_interval!(value, 0.0, 1.0);
/// ```
/// This will panic with the message "Invalid value for \`value\`. Must be in the interval \[0.0, 1.0\]."
#[macro_export]
macro_rules! assert_interval {
    ($var:expr, $a:expr, $b:expr) => {
        assert!(
            $var >= $a && $var <= $b,
            "Invalid value for `{}`. Must be in the interval [{}, {}].",
            stringify!($var),
            $a,
            $b,
        );
    };
}

/// Index of the largest value, ties resolved to the lowest index
///
/// **Panics** if `values` is empty
pub fn argmax(values: &[f64]) -> usize {
    assert!(!values.is_empty(), "`values` is not empty");
    values
        .iter()
        .enumerate()
        .skip(1)
        .fold(0, |best, (i, &v)| if v > values[best] { i } else { best })
}

/// Largest value in a non-empty slice
pub fn max(values: &[f64]) -> f64 {
    values[argmax(values)]
}
