use super::*;

#[test]
fn skill_record_decodes_lowercase_category() {
    let skill: SkillRecord = serde_json::from_value(serde_json::json!({
        "id": "s-1",
        "name": "React",
        "category": "frontend",
        "proficiency": 9
    }))
    .unwrap();
    assert_eq!(skill.category, SkillCategory::Frontend);
    assert_eq!(skill.proficiency, 9);
    assert_eq!(skill.icon, None);
}

#[test]
fn skill_record_rejects_unknown_category() {
    let result = serde_json::from_value::<SkillRecord>(serde_json::json!({
        "id": "s-1",
        "name": "Docker",
        "category": "devops",
        "proficiency": 5
    }));
    assert!(result.is_err());
}

#[test]
fn skill_category_as_str_matches_wire_name() {
    for category in SkillCategory::ALL {
        let wire = serde_json::to_value(category).unwrap();
        assert_eq!(wire, serde_json::Value::String(category.as_str().to_owned()));
    }
}

#[test]
fn project_record_defaults_optional_fields() {
    let project: ProjectRecord = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "title": "Weather Dashboard",
        "description": "Forecasts"
    }))
    .unwrap();
    assert!(project.technologies.is_empty());
    assert!(!project.featured);
    assert_eq!(project.github_url, None);
    assert_eq!(project.live_url, None);
    assert_eq!(project.image_url, None);
}

#[test]
fn experience_record_accepts_null_end_date() {
    let exp: ExperienceRecord = serde_json::from_value(serde_json::json!({
        "id": "e-1",
        "title": "Senior Frontend Developer",
        "company": "TechCorp Solutions",
        "location": "San Francisco, CA",
        "start_date": "2022-01",
        "end_date": null,
        "is_current": true,
        "description": ["Led frontend development"]
    }))
    .unwrap();
    assert_eq!(exp.start_date.as_deref(), Some("2022-01"));
    assert_eq!(exp.end_date, None);
    assert!(exp.is_current);
    assert_eq!(exp.description.len(), 1);
}

#[test]
fn contact_message_serializes_four_fields() {
    let msg = ContactMessage {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "Let's talk".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&msg).unwrap(),
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "Let's talk"
        })
    );
}
