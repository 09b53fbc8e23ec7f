use std::time::Duration;

/// Format a stopwatch duration as `HH:MM:SS.cc` with truncated centiseconds.
///
/// Hours wrap at 24, matching a wall-clock formatter. Sessions longer than a
/// day roll the hour field over; kept as documented behavior.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis() as u64;
    let centis = (total_ms % 1000) / 10;
    let total_secs = total_ms / 1000;
    let hours = (total_secs / 3600) % 24;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
}

/// Format whole seconds as `HH:MM:SS` (no sub-second precision).
pub fn format_hms(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_zero() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00:00.00");
    }

    #[test]
    fn elapsed_truncates_milliseconds_to_centiseconds() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "00:00:01.50");
        // 1999 ms is .99, not rounded up to 2 s.
        assert_eq!(format_elapsed(Duration::from_millis(1999)), "00:00:01.99");
        assert_eq!(format_elapsed(Duration::from_millis(9)), "00:00:00.00");
    }

    #[test]
    fn elapsed_full_fields() {
        let d = Duration::from_millis((2 * 3600 + 34 * 60 + 56) * 1000 + 780);
        assert_eq!(format_elapsed(d), "02:34:56.78");
    }

    #[test]
    fn elapsed_hours_wrap_at_24() {
        assert_eq!(format_elapsed(Duration::from_secs(25 * 3600 + 61)), "01:01:01.00");
    }

    #[test]
    fn hms_formats_and_pads() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(3600 + 2 * 60 + 3), "01:02:03");
        // No 24-hour wrap here; the countdown can be configured past a day.
        assert_eq!(format_hms(100 * 3600), "100:00:00");
    }
}
