//! Utility functions for the gridrl crate

/// Arithmetic mean of a slice.
///
/// Returns `None` for an empty slice rather than dividing by zero.
///
/// # Examples
///
/// ```
/// use gridrl::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Moving average of a series with the given window.
///
/// Only full windows are emitted, so the output has
/// `values.len() - window + 1` points. Returns an empty vector when the
/// window is zero or longer than the series.
///
/// # Examples
///
/// ```
/// use gridrl::utils::moving_average;
///
/// let smoothed = moving_average(&[1.0, 2.0, 3.0, 4.0], 2);
/// assert_eq!(smoothed, vec![1.5, 2.5, 3.5]);
///
/// assert!(moving_average(&[1.0, 2.0], 3).is_empty());
/// assert!(moving_average(&[1.0, 2.0], 0).is_empty());
/// ```
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || window > values.len() {
        return Vec::new();
    }
    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}
