//! Human-readable byte-size formatting
//!
//! Used for reporting encoded frame sizes and source file sizes at the UI
//! seam. Unit boundaries are at 1024, printed with one decimal place.

/// Format a byte count as a human-readable string
///
/// Units are `B`, `kB`, `MB`, and `GB` with a boundary at 1024 and one
/// decimal place.
///
/// # Example
///
/// ```
/// use lowpoly::format::to_readable_size;
///
/// assert_eq!(to_readable_size(2048), "2.0 kB");
/// ```
pub fn to_readable_size(size: u64) -> String {
    let mut value = size as f64;
    for unit in ["B", "kB", "MB"] {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1} GB", value)
}
