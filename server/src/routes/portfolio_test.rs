use super::*;

#[test]
fn portfolio_error_to_status_maps_invalid() {
    let err = PortfolioError::Invalid("title is required");
    assert_eq!(portfolio_error_to_status(&err), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn portfolio_error_to_status_maps_database() {
    let err = PortfolioError::Database(sqlx::Error::PoolTimedOut);
    assert_eq!(portfolio_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn server_errors_hide_database_detail() {
    let (status, Json(body)) = portfolio_error("fetch skills", PortfolioError::Database(sqlx::Error::PoolTimedOut));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch skills");
}

#[test]
fn seed_response_flattens_summary() {
    let resp = SeedResponse {
        message: "Portfolio data seeded successfully",
        summary: SeedSummary { projects: 3, skills: 12, experience: 2 },
    };
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["message"], "Portfolio data seeded successfully");
    assert_eq!(json["skills"], 12);
    assert_eq!(json["projects"], 3);
}
