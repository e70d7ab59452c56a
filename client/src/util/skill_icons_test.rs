use super::*;
use crate::net::types::SkillCategory;

#[test]
fn known_skill_maps_to_icon() {
    assert_eq!(skill_icon("React"), "⚛️");
    assert_eq!(skill_icon("Node.js"), "🟢");
    assert_eq!(skill_icon("Tailwind CSS"), "💨");
}

#[test]
fn unknown_skill_falls_back_to_default() {
    assert_eq!(skill_icon("Rust"), DEFAULT_SKILL_ICON);
    assert_eq!(skill_icon(""), DEFAULT_SKILL_ICON);
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(skill_icon("react"), DEFAULT_SKILL_ICON);
}

#[test]
fn record_icon_overrides_table() {
    let mut skill = SkillRecord {
        id: "s-1".to_owned(),
        name: "Git".to_owned(),
        category: SkillCategory::Tools,
        proficiency: 8,
        icon: None,
    };
    assert_eq!(display_icon(&skill), "📚");

    skill.icon = Some("🔧".to_owned());
    assert_eq!(display_icon(&skill), "🔧");

    skill.icon = Some("  ".to_owned());
    assert_eq!(display_icon(&skill), "📚");
}
