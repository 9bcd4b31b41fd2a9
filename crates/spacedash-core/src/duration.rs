/// Formats milliseconds as `M:SS`, minutes unpadded.
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::format_duration;

    #[test]
    fn formats_whole_minutes() {
        assert_eq!(format_duration(180_000), "3:00");
    }

    #[test]
    fn pads_seconds_below_ten() {
        assert_eq!(format_duration(65_000), "1:05");
        assert_eq!(format_duration(0), "0:00");
    }

    #[test]
    fn truncates_partial_seconds_and_keeps_long_minutes() {
        assert_eq!(format_duration(59_999), "0:59");
        assert_eq!(format_duration(3_725_000), "62:05");
    }
}
