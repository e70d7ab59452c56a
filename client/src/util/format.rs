//! Display formatting for dates, proficiency bars, labels and images.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{ExperienceRecord, ProjectRecord};

pub const PRESENT_LABEL: &str = "Present";

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Format `YYYY-MM[-DD...]` as `"Jan 2022"`. Unrecognized input is returned verbatim.
#[must_use]
pub fn format_month_year(date: &str) -> String {
    let trimmed = date.trim();
    let mut parts = trimmed.splitn(3, '-');
    let (Some(year), Some(month)) = (parts.next(), parts.next()) else {
        return trimmed.to_owned();
    };
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed.to_owned();
    }
    let month_digits: String = month.chars().take_while(char::is_ascii_digit).collect();
    match month_digits.parse::<usize>() {
        Ok(m @ 1..=12) if month_digits.len() <= 2 => format!("{} {year}", MONTHS[m - 1]),
        _ => trimmed.to_owned(),
    }
}

/// Label for an optional date; absence means the position is ongoing.
#[must_use]
pub fn date_label(date: Option<&str>) -> String {
    match date {
        Some(d) if !d.trim().is_empty() => format_month_year(d),
        _ => PRESENT_LABEL.to_owned(),
    }
}

/// End label for a position. Current roles always read "Present".
#[must_use]
pub fn end_date_label(exp: &ExperienceRecord) -> String {
    if exp.is_current {
        PRESENT_LABEL.to_owned()
    } else {
        date_label(exp.end_date.as_deref())
    }
}

/// `"Jan 2022 - Present"` style range for the experience badge.
#[must_use]
pub fn date_range_label(exp: &ExperienceRecord) -> String {
    format!("{} - {}", date_label(exp.start_date.as_deref()), end_date_label(exp))
}

/// Proficiency (0–10) as a 0–100 percentage.
#[must_use]
pub fn proficiency_percent(proficiency: u8) -> u8 {
    proficiency.min(10) * 10
}

/// CSS modifier for the proficiency bar colour band.
#[must_use]
pub fn proficiency_tone(proficiency: u8) -> &'static str {
    match proficiency {
        8.. => "skill-bar__fill--expert",
        6..=7 => "skill-bar__fill--strong",
        4..=5 => "skill-bar__fill--working",
        _ => "skill-bar__fill--learning",
    }
}

/// Uppercase the first character.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cased title with whitespace runs collapsed to `-`.
#[must_use]
pub fn title_slug(title: &str) -> String {
    title.split_whitespace().map(str::to_lowercase).collect::<Vec<_>>().join("-")
}

/// Card image: the explicit URL, else a seeded placeholder.
#[must_use]
pub fn project_image_url(project: &ProjectRecord) -> String {
    match project.image_url.as_deref() {
        Some(url) if !url.trim().is_empty() => url.to_owned(),
        _ => format!("https://picsum.photos/seed/{}/600/400", title_slug(&project.title)),
    }
}
