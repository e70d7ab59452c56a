use super::*;

#[test]
fn demo_skills_cover_every_category() {
    for category in ["frontend", "backend", "tools"] {
        assert!(SKILLS.iter().any(|s| s.category == category), "no {category} skills");
    }
    assert_eq!(SKILLS.len(), 12);
}

#[test]
fn demo_skills_stay_in_range() {
    assert!(SKILLS.iter().all(|s| (0..=10).contains(&s.proficiency)));
}

#[test]
fn demo_projects_mix_featured_and_regular() {
    assert_eq!(PROJECTS.len(), 3);
    assert_eq!(PROJECTS.iter().filter(|p| p.featured).count(), 2);
    assert!(PROJECTS.iter().all(|p| !p.technologies.is_empty()));
}

#[test]
fn demo_experience_current_role_has_no_end_date() {
    let current: Vec<_> = EXPERIENCE.iter().filter(|e| e.is_current).collect();
    assert_eq!(current.len(), 1);
    assert!(current[0].end_date.is_none());
    assert!(EXPERIENCE.iter().filter(|e| !e.is_current).all(|e| e.end_date.is_some()));
}

#[test]
fn demo_experience_is_newest_first() {
    let starts: Vec<_> = EXPERIENCE.iter().map(|e| e.start_date).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(starts, sorted);
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
async fn seed_demo_data_replaces_collections() {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for live-db-tests");
    let pool = crate::db::init_pool(&url).await.expect("db init");

    let first = seed_demo_data(&pool).await.expect("first seed");
    let second = seed_demo_data(&pool).await.expect("second seed");
    assert_eq!(first, second);

    let projects = crate::services::portfolio::list_projects(&pool).await.expect("projects");
    assert_eq!(projects.len(), PROJECTS.len());
    assert_eq!(projects[0].title, PROJECTS[0].title);

    let skills = crate::services::portfolio::list_skills(&pool).await.expect("skills");
    assert_eq!(skills[0].name, "HTML5");
}
