use chrono::{DateTime, TimeZone};

/// Renders an amount in euros rounded to cents, without trailing zeros
///
/// # Example
///
/// ```ignore
/// assert_eq!(format_amount(7800.0), "7800");
/// assert_eq!(format_amount(5525.65), "5525.65");
/// ```
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Drops control characters from model output, keeping line breaks and tabs
pub fn sanitize_output(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Cuts a text to at most `max_chars` characters, marking the cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...[truncated]", head)
}

/// File name used when saving a result, e.g. `fiscalite_20240131_142501.txt`
pub fn output_file_name<Tz: TimeZone>(prefix: &str, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.txt", prefix, at.format("%Y%m%d_%H%M%S"))
}
