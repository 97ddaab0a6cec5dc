//! Display formatting for the fixed `tr-TR` locale.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

pub const ELLIPSIS: &str = "...";

/// Long calendar date, e.g. `5 Mart 2024`. Uses the timestamp's own offset.
pub fn format_date<Tz: TimeZone>(ts: &DateTime<Tz>) -> String {
    long_date(ts.naive_local().date())
}

fn long_date(date: NaiveDate) -> String {
    let month = MONTHS_TR[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Seconds as `M:SS`. Minutes keep counting past an hour.
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Integer with `.` thousands separators.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

pub fn format_score(score: f64, decimals: usize) -> String {
    format!("{score:.decimals$}")
}

/// Score badge text, e.g. `62.3 puan`.
pub fn score_label(score: f64) -> String {
    format!("{} puan", format_score(score, 1))
}

/// The first `max` characters of `text`, with an ellipsis only when something was cut.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn durations_pad_seconds() {
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(5), "0:05");
        assert_eq!(format_duration(600), "10:00");
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(3725), "62:05");
    }

    fn date(raw: &str) -> String {
        format_date(&DateTime::parse_from_rfc3339(raw).unwrap())
    }

    #[test]
    fn dates_use_turkish_month_names() {
        assert_eq!(date("2024-03-05T10:00:00Z"), "5 Mart 2024");
        assert_eq!(date("2023-08-31T12:00:00Z"), "31 Ağustos 2023");
        assert_eq!(date("2025-12-01T00:00:00+03:00"), "1 Aralık 2025");
    }

    #[test]
    fn date_keeps_its_own_offset() {
        let ts = FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 1, 30, 0)
            .unwrap();
        assert_eq!(format_date(&ts), "1 Ocak 2024");
    }

    #[test]
    fn counts_group_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(15000), "15.000");
        assert_eq!(format_count(1234567), "1.234.567");
    }

    #[test]
    fn truncate_adds_ellipsis_only_when_cut() {
        let exact = "a".repeat(100);
        assert_eq!(truncate(&exact, 100), exact);

        let long = "b".repeat(101);
        assert_eq!(truncate(&long, 100), format!("{}...", "b".repeat(100)));

        assert_eq!(truncate("kısa", 80), "kısa");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let turkish = "ğ".repeat(81);
        let cut = truncate(&turkish, 80);
        assert_eq!(cut.chars().count(), 83);
        assert!(cut.starts_with(&"ğ".repeat(80)));
    }

    #[test]
    fn score_label_has_one_decimal() {
        assert_eq!(score_label(62.34), "62.3 puan");
        assert_eq!(score_label(7.0), "7.0 puan");
        assert_eq!(format_score(0.08, 2), "0.08");
    }
}
