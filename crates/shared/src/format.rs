//! Display formatting for the calculators' Italian locale
//!
//! Totals are shown with '.' as the thousands separator ("1.250 PS").

/// Unit label for Development Points (Punti Sviluppo)
pub const POINTS_UNIT: &str = "PS";

/// Unit label for training time
pub const DAYS_UNIT: &str = "giorni";

/// Group digits in threes with '.' (e.g., 1234567 -> "1.234.567")
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Format a cost with its unit (e.g., "1.250 PS")
pub fn format_points(points: u64) -> String {
    format!("{} {}", format_grouped(points), POINTS_UNIT)
}

/// Format a training time with its unit (e.g., "150 giorni")
pub fn format_days(days: u64) -> String {
    format!("{} {}", format_grouped(days), DAYS_UNIT)
}
