//! Portfolio collections: skills, projects and work experience.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read paths back the Skills, Projects and Experience pages. Each query
//! returns rows already in display order so the client never re-sorts.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures surface as `PortfolioError::Database`; malformed project
//! submissions are rejected before touching the pool.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

pub const MAX_SKILLS: i64 = 100;
pub const MAX_PROJECTS: i64 = 100;
pub const MAX_FEATURED_PROJECTS: i64 = 10;
pub const MAX_EXPERIENCE: i64 = 100;

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("invalid project: {0}")]
    Invalid(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// ROWS
// =============================================================================

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SkillRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub proficiency: i16,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub featured: bool,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ExperienceRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: Vec<String>,
}

/// Body of `POST /api/projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Trim a project submission and reject it if title or description is blank.
///
/// # Errors
///
/// Returns [`PortfolioError::Invalid`] naming the first blank field.
pub fn normalize_new_project(project: NewProject) -> Result<NewProject, PortfolioError> {
    let title = project.title.trim().to_owned();
    if title.is_empty() {
        return Err(PortfolioError::Invalid("title is required"));
    }
    let description = project.description.trim().to_owned();
    if description.is_empty() {
        return Err(PortfolioError::Invalid("description is required"));
    }
    let technologies = project
        .technologies
        .into_iter()
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .collect();

    Ok(NewProject {
        title,
        description,
        technologies,
        github_url: blank_to_none(project.github_url),
        live_url: blank_to_none(project.live_url),
        image_url: blank_to_none(project.image_url),
        featured: project.featured,
    })
}

// =============================================================================
// SKILLS
// =============================================================================

/// All skills, strongest first.
pub async fn list_skills(pool: &PgPool) -> Result<Vec<SkillRow>, PortfolioError> {
    let rows = sqlx::query_as::<_, SkillRow>(
        r"SELECT id, name, category, proficiency, icon
          FROM skills
          ORDER BY proficiency DESC, name ASC
          LIMIT $1",
    )
    .bind(MAX_SKILLS)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Skills in one category, strongest first. Unknown categories yield nothing.
pub async fn list_skills_by_category(pool: &PgPool, category: &str) -> Result<Vec<SkillRow>, PortfolioError> {
    let rows = sqlx::query_as::<_, SkillRow>(
        r"SELECT id, name, category, proficiency, icon
          FROM skills
          WHERE category = $1
          ORDER BY proficiency DESC, name ASC
          LIMIT $2",
    )
    .bind(category.trim().to_ascii_lowercase())
    .bind(MAX_SKILLS)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

// =============================================================================
// PROJECTS
// =============================================================================

/// Projects, newest first.
pub async fn list_projects(pool: &PgPool) -> Result<Vec<ProjectRow>, PortfolioError> {
    let rows = sqlx::query_as::<_, ProjectRow>(
        r"SELECT id, title, description, technologies, featured, github_url, live_url, image_url, created_at
          FROM projects
          ORDER BY created_at DESC
          LIMIT $1",
    )
    .bind(MAX_PROJECTS)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Featured projects only, newest first.
pub async fn list_featured_projects(pool: &PgPool) -> Result<Vec<ProjectRow>, PortfolioError> {
    let rows = sqlx::query_as::<_, ProjectRow>(
        r"SELECT id, title, description, technologies, featured, github_url, live_url, image_url, created_at
          FROM projects
          WHERE featured
          ORDER BY created_at DESC
          LIMIT $1",
    )
    .bind(MAX_FEATURED_PROJECTS)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Validate and insert a project, returning the stored row.
pub async fn create_project(pool: &PgPool, project: NewProject) -> Result<ProjectRow, PortfolioError> {
    let project = normalize_new_project(project)?;
    let row = sqlx::query_as::<_, ProjectRow>(
        r"INSERT INTO projects (title, description, technologies, featured, github_url, live_url, image_url)
          VALUES ($1, $2, $3, $4, $5, $6, $7)
          RETURNING id, title, description, technologies, featured, github_url, live_url, image_url, created_at",
    )
    .bind(&project.title)
    .bind(&project.description)
    .bind(&project.technologies)
    .bind(project.featured)
    .bind(&project.github_url)
    .bind(&project.live_url)
    .bind(&project.image_url)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

// =============================================================================
// EXPERIENCE
// =============================================================================

/// Work history, most recent start first.
pub async fn list_experience(pool: &PgPool) -> Result<Vec<ExperienceRow>, PortfolioError> {
    let rows = sqlx::query_as::<_, ExperienceRow>(
        r"SELECT id, title, company, location, start_date, end_date, is_current, description
          FROM experiences
          ORDER BY start_date DESC NULLS LAST, title ASC
          LIMIT $1",
    )
    .bind(MAX_EXPERIENCE)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod tests;
