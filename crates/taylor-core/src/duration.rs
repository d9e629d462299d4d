//! Duration formatting.

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

/// Splits seconds into `(hours, minutes, seconds)`. Hours are unbounded.
pub const fn split_hms(secs: u64) -> (u64, u64, u64) {
    let hours = secs / SECS_PER_HOUR;
    let minutes = (secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = secs % SECS_PER_MINUTE;
    (hours, minutes, seconds)
}

/// Formats seconds as `H:MM:SS` with hours right-aligned to four columns.
///
/// `hms(3600)` is `"   1:00:00"`, `hms(360_000)` is `" 100:00:00"`.
pub fn hms(secs: u64) -> String {
    let (hours, minutes, seconds) = split_hms(secs);
    format!("{hours:4}:{minutes:02}:{seconds:02}")
}

/// Formats seconds as decimal hours with two digits, e.g. `"1.50"`.
#[allow(clippy::cast_precision_loss)]
pub fn hours_decimal(secs: u64) -> String {
    format!("{:.2}", secs as f64 / SECS_PER_HOUR as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_decimal() {
        assert_eq!(hours_decimal(5401), "1.50");
        assert_eq!(hours_decimal(7200), "2.00");
        assert_eq!(hours_decimal(0), "0.00");
        assert_eq!(hours_decimal(900), "0.25");
    }

    #[test]
    fn test_hms_pads_hours_with_spaces() {
        assert_eq!(hms(3600), "   1:00:00");
        assert_eq!(hms(1800), "   0:30:00");
        assert_eq!(hms(0), "   0:00:00");
        assert_eq!(hms(3661), "   1:01:01");
    }

    #[test]
    fn test_hms_hours_exceed_a_day() {
        assert_eq!(hms(25 * 3600 + 59), "  25:00:59");
        assert_eq!(hms(12_345 * 3600), "12345:00:00");
    }

    #[test]
    fn test_split_hms_reconstructs_seconds() {
        for secs in (0..200_000).step_by(37).chain([59, 60, 3599, 3600, 86_399, 86_400]) {
            let (h, m, s) = split_hms(secs);
            assert!(m < 60 && s < 60);
            assert_eq!(h * 3600 + m * 60 + s, secs);
        }
    }
}
