use chrono::NaiveTime;

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("hour and minute are in range")
}

/// Clock-ins strictly after this are late punches. Fixed by policy.
pub fn late_threshold() -> NaiveTime {
    hm(9, 15)
}

/// Clock-outs strictly before this are early punches. Fixed by policy.
pub fn early_threshold() -> NaiveTime {
    hm(16, 15)
}

/// Parse a raw clock cell into a time of day.
///
/// Only a trimmed 24-hour `HH:MM` value (zero-padded or not) counts as a
/// punch. Anything else - blank cells, seconds, out-of-range values, stray
/// text - is treated as if the punch never happened rather than as an
/// error, so dirty rows reduce counts instead of aborting the run.
pub fn parse_clock(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M").ok()
}

/// A clock-in is late when present and strictly after the threshold.
pub fn is_late(clock_in: Option<NaiveTime>) -> bool {
    clock_in.map(|t| t > late_threshold()).unwrap_or(false)
}

/// A clock-out is early when present and strictly before the threshold.
pub fn is_early(clock_out: Option<NaiveTime>) -> bool {
    clock_out.map(|t| t < early_threshold()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_fifteen_exactly_is_not_late() {
        assert!(!is_late(Some(hm(9, 15))));
        assert!(is_late(Some(hm(9, 16))));
        assert!(!is_late(Some(hm(9, 14))));
        assert!(is_late(Some(hm(23, 59))));
        assert!(!is_late(None));
    }

    #[test]
    fn test_sixteen_fifteen_exactly_is_not_early() {
        assert!(!is_early(Some(hm(16, 15))));
        assert!(is_early(Some(hm(16, 14))));
        assert!(!is_early(Some(hm(16, 16))));
        assert!(is_early(Some(hm(0, 0))));
        assert!(!is_early(None));
    }

    #[test]
    fn test_parse_clock_accepts_24_hour_hh_mm() {
        assert_eq!(parse_clock("09:15"), Some(hm(9, 15)));
        assert_eq!(parse_clock("9:05"), Some(hm(9, 5)));
        assert_eq!(parse_clock(" 16:45 "), Some(hm(16, 45)));
        assert_eq!(parse_clock("23:59"), Some(hm(23, 59)));
        assert_eq!(parse_clock("0:00"), Some(hm(0, 0)));
    }

    #[test]
    fn test_parse_clock_treats_everything_else_as_absent() {
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("   "), None);
        assert_eq!(parse_clock("9:xx"), None);
        assert_eq!(parse_clock("24:00"), None);
        assert_eq!(parse_clock("12:60"), None);
        assert_eq!(parse_clock("09:15:30"), None);
        assert_eq!(parse_clock("noon"), None);
    }
}
