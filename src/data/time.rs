use chrono::{Local, NaiveDateTime, NaiveTime};

// ---------------------------------------------------------------------------
// Clock strings: "H:MM" / "H:MM:SS"
// ---------------------------------------------------------------------------

/// Convert a clock string to a second offset from midnight.
///
/// Three components give `h*3600 + m*60 + s`, two give `h*3600 + m*60`.
/// Anything else (wrong arity, non-numeric parts) yields 0.
pub fn time_to_seconds(s: &str) -> u32 {
    let parts: Option<Vec<u32>> = s.split(':').map(|p| p.trim().parse().ok()).collect();
    match parts.as_deref() {
        Some(&[h, m, s]) => offset(h, m, s),
        Some(&[h, m]) => offset(h, m, 0),
        _ => 0,
    }
}

fn offset(h: u32, m: u32, s: u32) -> u32 {
    h.checked_mul(3600)
        .and_then(|v| v.checked_add(m.checked_mul(60)?))
        .and_then(|v| v.checked_add(s))
        .unwrap_or(0)
}

/// Split and range-check a clock string.
///
/// Returns `None` on fewer than two components, any non-numeric component,
/// or `h > 23`, `m > 59`, `s > 59`. A missing seconds part is 0.
fn clock_parts(s: &str) -> Option<(u32, u32, u32)> {
    let parts: Vec<u32> = s
        .trim()
        .split(':')
        .map(|p| p.trim().parse().ok())
        .collect::<Option<_>>()?;
    if parts.len() < 2 {
        return None;
    }
    let (h, m, sec) = (parts[0], parts[1], parts.get(2).copied().unwrap_or(0));
    if h > 23 || m > 59 || sec > 59 {
        return None;
    }
    Some((h, m, sec))
}

/// Parse a validated clock string into a time of day.
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    let (h, m, sec) = clock_parts(s)?;
    NaiveTime::from_hms_opt(h, m, sec)
}

/// Resolve a clock string to a timestamp on today's (local) date.
pub fn time_str_to_date(s: &str) -> Option<NaiveDateTime> {
    let time = parse_clock(s)?;
    Some(Local::now().date_naive().and_time(time))
}

/// Render a second offset as `HH:MM:SS`, wrapping at 24h.
pub fn format_clock(seconds: i64) -> String {
    let secs = seconds.rem_euclid(86_400);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn seconds_from_full_and_short_clock() {
        assert_eq!(time_to_seconds("1:02:03"), 3723);
        assert_eq!(time_to_seconds("1:02"), 3720);
        assert_eq!(time_to_seconds("23:59:59"), 86_399);
    }

    #[test]
    fn malformed_clock_is_zero_offset() {
        assert_eq!(time_to_seconds(""), 0);
        assert_eq!(time_to_seconds("noon"), 0);
        assert_eq!(time_to_seconds("12"), 0);
        assert_eq!(time_to_seconds("1:2:3:4"), 0);
        assert_eq!(time_to_seconds("ab:cd"), 0);
        // an empty component is not read as zero
        assert_eq!(time_to_seconds("1:"), 0);
        assert_eq!(time_to_seconds(":30"), 0);
    }

    #[test]
    fn same_day_timestamp_rejects_out_of_range() {
        assert!(time_str_to_date("24:00").is_none());
        assert!(time_str_to_date("10:60").is_none());
        assert!(time_str_to_date("10:00:60").is_none());
        assert!(time_str_to_date("10").is_none());
        assert!(time_str_to_date("10:xx").is_none());

        let ts = time_str_to_date(" 09:30 ").unwrap();
        assert_eq!(ts.date(), Local::now().date_naive());
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (9, 30, 0));
    }

    #[test]
    fn parse_clock_keeps_seconds() {
        let t = parse_clock("7:05:09").unwrap();
        assert_eq!(t.num_seconds_from_midnight(), 7 * 3600 + 5 * 60 + 9);
    }

    #[test]
    fn clock_formatting_wraps() {
        assert_eq!(format_clock(3723), "01:02:03");
        assert_eq!(format_clock(86_400 + 61), "00:01:01");
        assert_eq!(format_clock(-1), "23:59:59");
    }
}
