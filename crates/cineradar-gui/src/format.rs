//! Display formatting helpers for entry and metadata values.

use chrono::NaiveDate;

/// Next release date as shown on cards, "-" when unknown.
pub fn release_date(date: Option<&str>) -> String {
    match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map(|parsed| parsed.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|_| d.to_string()),
        None => "-".into(),
    }
}

/// `7.8 / 10 (1,234 votes)`, or just the score when nobody counted votes.
pub fn rating(average: f32, votes: Option<u32>) -> String {
    match votes {
        Some(n) => format!("{average:.1} / 10 ({} votes)", thousands(n)),
        None => format!("{average:.1} / 10"),
    }
}

/// Minutes as `2h 28m`.
pub fn runtime(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

pub fn seasons(count: u32) -> String {
    if count == 1 {
        "1 season".into()
    } else {
        format!("{count} seasons")
    }
}

fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
