use super::*;

#[test]
fn normalize_base_url_defaults_to_same_origin() {
    assert_eq!(normalize_base_url(None), "");
    assert_eq!(normalize_base_url(Some("   ")), "");
}

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url(Some("https://api.example.com/")), "https://api.example.com");
    assert_eq!(normalize_base_url(Some(" https://api.example.com// ")), "https://api.example.com");
}

#[test]
fn endpoint_concatenates_base_and_path() {
    assert_eq!(endpoint("https://api.example.com", SKILLS_PATH), "https://api.example.com/api/skills");
    assert_eq!(endpoint("", CONTACT_PATH), "/api/contact");
}

#[test]
fn api_paths_match_backend_routes() {
    assert_eq!(SKILLS_PATH, "/api/skills");
    assert_eq!(PROJECTS_PATH, "/api/projects");
    assert_eq!(EXPERIENCE_PATH, "/api/experience");
    assert_eq!(CONTACT_PATH, "/api/contact");
}

#[test]
fn status_to_result_accepts_any_2xx() {
    assert_eq!(status_to_result(200), Ok(()));
    assert_eq!(status_to_result(201), Ok(()));
    assert_eq!(status_to_result(299), Ok(()));
}

#[test]
fn status_to_result_rejects_non_2xx() {
    assert_eq!(status_to_result(199), Err(ApiError::Status(199)));
    assert_eq!(status_to_result(304), Err(ApiError::Status(304)));
    assert_eq!(status_to_result(422), Err(ApiError::Status(422)));
    assert_eq!(status_to_result(500), Err(ApiError::Status(500)));
}

#[test]
fn api_error_messages_name_the_failure() {
    assert_eq!(ApiError::Status(503).to_string(), "request failed: 503");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(
        ApiError::Decode("expected array".to_owned()).to_string(),
        "malformed response: expected array"
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn reads_fail_without_browser_transport() {
    let result = futures::executor::block_on(fetch_skills());
    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn contact_submit_fails_without_browser_transport() {
    let result = futures::executor::block_on(submit_contact(&ContactMessage::default()));
    assert!(matches!(result, Err(ApiError::Network(_))));
}
