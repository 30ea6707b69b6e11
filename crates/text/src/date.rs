//! `YYYY-MM` date formatting with per-theme month tables.

/// Month names and the strings used when composing a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub months: [&'static str; 12],
    /// Replaces the end date of an ongoing entry.
    pub present: &'static str,
    pub separator: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale {
        months: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        present: "Present",
        separator: " - ",
    };

    pub const ENGLISH_LONG: Locale = Locale {
        months: [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
        present: "Present",
        separator: " - ",
    };

    pub const SPANISH: Locale = Locale {
        months: [
            "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
        ],
        present: "Presente",
        separator: " \u{2013} ",
    };

    pub const fn with_separator(self, separator: &'static str) -> Self {
        Locale { separator, ..self }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::ENGLISH
    }
}

/// `"2021-03"` becomes `"Mar 2021"`. Input without both a year and a month
/// segment, or with a month outside 1..=12, is returned unchanged.
pub fn format_month_year(date: &str, locale: &Locale) -> String {
    let mut parts = date.split('-');
    let year = parts.next().unwrap_or("").trim();
    let month = parts.next().unwrap_or("").trim();
    if year.is_empty() || month.is_empty() {
        return date.to_string();
    }
    match month.parse::<usize>() {
        Ok(m) if (1..=12).contains(&m) => format!("{} {}", locale.months[m - 1], year),
        _ => date.to_string(),
    }
}

/// Composes `start{separator}end`. An empty start yields an empty string;
/// when `current` is set the end date is never read.
pub fn format_date_range(start: &str, end: &str, current: bool, locale: &Locale) -> String {
    if start.trim().is_empty() {
        return String::new();
    }
    let start = format_month_year(start, locale);
    let end = if current {
        locale.present.to_string()
    } else {
        format_month_year(end, locale)
    };
    if end.is_empty() {
        start
    } else {
        format!("{}{}{}", start, locale.separator, end)
    }
}
