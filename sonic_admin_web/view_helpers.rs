use chrono::{DateTime, Utc};

/// Formats a timestamp as a short calendar date (M/D/YYYY).
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Human readable distance between `timestamp` and `now`, e.g. "3 hours ago".
pub fn format_relative_time(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let minutes = (*now - *timestamp).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    let plural = |n: i64| if n > 1 { "s" } else { "" };

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} minute{} ago", plural(minutes))
    } else if hours < 24 {
        format!("{hours} hour{} ago", plural(hours))
    } else {
        format!("{days} day{} ago", plural(days))
    }
}

/// Formats a byte count with 1024 steps, two decimals and B/KB/MB/GB units.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2} {}", UNITS[unit])
}

/// Two-letter initials: first letters of the first two words, or the first two characters.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let letters: String = if words.len() >= 2 {
        words.iter().take(2).filter_map(|w| w.chars().next()).collect()
    } else {
        name.trim().chars().take(2).collect()
    };
    letters.to_uppercase()
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cuts `value` to `max` characters, appending "..." when something was dropped.
pub fn truncate_chars(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let head: String = value.chars().take(max).collect();
        format!("{head}...")
    } else {
        value.to_string()
    }
}

/// Formats a float the way an HTML attribute expects it (no trailing ".0").
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 15, 4, 0).unwrap();
        assert_eq!(format_date(&date), "3/7/2024");
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 15, 0, 0).unwrap();

        assert_eq!(format_relative_time(&(now - Duration::seconds(20)), &now), "just now");
        assert_eq!(format_relative_time(&(now - Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(format_relative_time(&(now - Duration::minutes(59)), &now), "59 minutes ago");
        assert_eq!(format_relative_time(&(now - Duration::minutes(60)), &now), "1 hour ago");
        assert_eq!(format_relative_time(&(now - Duration::hours(23)), &now), "23 hours ago");
        assert_eq!(format_relative_time(&(now - Duration::hours(24)), &now), "1 day ago");
        assert_eq!(format_relative_time(&(now - Duration::days(9)), &now), "9 days ago");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 15, 0, 0).unwrap();
        assert_eq!(format_relative_time(&(now + Duration::hours(2)), &now), "just now");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512.00 B");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.00 GB");
        assert_eq!(format_bytes(2048 * 1024 * 1024 * 1024), "2048.00 GB");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("grace  brewster hopper"), "GB");
        assert_eq!(initials("system"), "SY");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_capitalize_and_truncate() {
        assert_eq!(capitalize("summary"), "Summary");
        assert_eq!(capitalize(""), "");
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("abc", 3), "abc");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(0.5), "0.5");
    }
}
