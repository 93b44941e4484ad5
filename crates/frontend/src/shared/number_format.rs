//! Size formatting for file listings

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Bytes as megabytes with 2 decimals
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_megabytes(2 * 1024 * 1024), "2.00 MB");
/// ```
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(0), "0.00 MB");
        assert_eq!(format_megabytes(10 * 1024 * 1024), "10.00 MB");
        assert_eq!(format_megabytes(1_572_864), "1.50 MB");
        assert_eq!(format_megabytes(5_000), "0.00 MB");
    }
}
