//! Skill name to emoji lookup for skill cards.

#[cfg(test)]
#[path = "skill_icons_test.rs"]
mod skill_icons_test;

use crate::net::types::SkillRecord;

pub const DEFAULT_SKILL_ICON: &str = "💻";

const SKILL_ICONS: &[(&str, &str)] = &[
    ("React", "⚛️"),
    ("JavaScript", "🟨"),
    ("TypeScript", "🔷"),
    ("HTML5", "🧡"),
    ("CSS3", "🎨"),
    ("Tailwind CSS", "💨"),
    ("Node.js", "🟢"),
    ("Express", "🚀"),
    ("MongoDB", "🍃"),
    ("Git", "📚"),
    ("Webpack", "📦"),
    ("Figma", "🎨"),
];

/// Icon for a skill name; exact match, falling back to a laptop.
#[must_use]
pub fn skill_icon(name: &str) -> &'static str {
    SKILL_ICONS
        .iter()
        .find(|(n, _)| *n == name)
        .map_or(DEFAULT_SKILL_ICON, |&(_, icon)| icon)
}

/// A record's own icon wins over the lookup table.
#[must_use]
pub fn display_icon(skill: &SkillRecord) -> String {
    match skill.icon.as_deref() {
        Some(icon) if !icon.trim().is_empty() => icon.to_owned(),
        _ => skill_icon(&skill.name).to_owned(),
    }
}
