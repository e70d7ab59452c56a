//! Portfolio collection routes: skills, projects, experience and seeding.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::routes::{ApiError, error_body};
use crate::services::portfolio::{self, ExperienceRow, NewProject, PortfolioError, ProjectRow, SkillRow};
use crate::services::seed::{self, SeedSummary};
use crate::state::AppState;

pub(crate) fn portfolio_error_to_status(err: &PortfolioError) -> StatusCode {
    match err {
        PortfolioError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PortfolioError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn portfolio_error(what: &'static str, err: PortfolioError) -> ApiError {
    let status = portfolio_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, what, "portfolio query failed");
        return error_body(status, format!("Failed to {what}"));
    }
    error_body(status, err.to_string())
}

/// `GET /api/skills`: all skills, strongest first.
pub async fn list_skills(State(state): State<AppState>) -> Result<Json<Vec<SkillRow>>, ApiError> {
    let rows = portfolio::list_skills(&state.pool)
        .await
        .map_err(|e| portfolio_error("fetch skills", e))?;
    Ok(Json(rows))
}

/// `GET /api/skills/{category}`: skills in one category.
pub async fn list_skills_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<SkillRow>>, ApiError> {
    let rows = portfolio::list_skills_by_category(&state.pool, &category)
        .await
        .map_err(|e| portfolio_error("fetch skills", e))?;
    Ok(Json(rows))
}

/// `GET /api/projects`: all projects, newest first.
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<ProjectRow>>, ApiError> {
    let rows = portfolio::list_projects(&state.pool)
        .await
        .map_err(|e| portfolio_error("fetch projects", e))?;
    Ok(Json(rows))
}

/// `GET /api/projects/featured`: featured projects only.
pub async fn list_featured_projects(State(state): State<AppState>) -> Result<Json<Vec<ProjectRow>>, ApiError> {
    let rows = portfolio::list_featured_projects(&state.pool)
        .await
        .map_err(|e| portfolio_error("fetch featured projects", e))?;
    Ok(Json(rows))
}

/// `POST /api/projects`: create a project.
pub async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<NewProject>,
) -> Result<(StatusCode, Json<ProjectRow>), ApiError> {
    let row = portfolio::create_project(&state.pool, body)
        .await
        .map_err(|e| portfolio_error("create project", e))?;
    tracing::info!(project_id = %row.id, title = %row.title, "project created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/experience`: work history, most recent first.
pub async fn list_experience(State(state): State<AppState>) -> Result<Json<Vec<ExperienceRow>>, ApiError> {
    let rows = portfolio::list_experience(&state.pool)
        .await
        .map_err(|e| portfolio_error("fetch experience", e))?;
    Ok(Json(rows))
}

#[derive(serde::Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub summary: SeedSummary,
}

/// `POST /api/seed-data`: replace the public collections with demo data.
pub async fn seed_data(State(state): State<AppState>) -> Result<Json<SeedResponse>, ApiError> {
    let summary = seed::seed_demo_data(&state.pool)
        .await
        .map_err(|e| portfolio_error("seed data", e))?;
    tracing::info!(projects = summary.projects, skills = summary.skills, experience = summary.experience, "portfolio data seeded");
    Ok(Json(SeedResponse { message: "Portfolio data seeded successfully", summary }))
}

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod tests;
