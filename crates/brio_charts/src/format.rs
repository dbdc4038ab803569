//! Numeric and date formatting helpers for axis and card labels.

/// Currency axis label: value in thousands, no decimals, `$NK`.
pub fn format_currency(value: f32) -> String {
    format!("${:.0}K", value / 1000.0)
}

/// Abbreviate large numbers: millions and thousands with one decimal,
/// smaller values printed raw.
pub fn format_number(value: f32) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{}", value.round() as i64)
    }
}

/// Group an integer with thousands separators (`1234` -> `"1,234"`).
pub fn format_grouped(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let first = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Render a `YYYY-MM-DD` date as `"Jan 15, 2024"`.
///
/// Best effort: malformed input is returned unchanged.
pub fn format_date(date: &str) -> String {
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return date.to_string();
    };
    let (Ok(month), Ok(day)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return date.to_string();
    };
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || year.len() != 4 {
        return date.to_string();
    }
    format!("{} {}, {}", MONTHS[month - 1], day, year)
}
