//! Shared wire DTOs for the portfolio REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON bodies field-for-field. Optional
//! fields default when missing so older rows or hand-seeded data still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Skill grouping used by the Skills page filter buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub const ALL: [Self; 3] = [Self::Frontend, Self::Backend, Self::Tools];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
        }
    }
}

/// One skill row from `GET /api/skills`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    /// Self-assessed level on a 0–10 scale.
    pub proficiency: u8,
    #[serde(default)]
    pub icon: Option<String>,
}

/// One project row from `GET /api/projects`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One position from `GET /api/experience`.
///
/// `start_date`/`end_date` are `YYYY-MM` or `YYYY-MM-DD` strings; `None`
/// renders as "Present".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub description: Vec<String>,
}

/// Payload for `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
