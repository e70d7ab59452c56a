//! Demo portfolio data and the `POST /api/seed-data` reset.
//!
//! DESIGN
//! ======
//! Seeding replaces the three public collections in one transaction, so a
//! failed insert leaves the previous data untouched. Contact messages are
//! never cleared. Projects get staggered `created_at` values so the listing
//! order matches declaration order.

use sqlx::PgPool;

use crate::services::portfolio::PortfolioError;

pub struct SeedProject {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: &'static str,
    pub featured: bool,
}

pub struct SeedSkill {
    pub name: &'static str,
    pub category: &'static str,
    pub proficiency: i16,
}

pub struct SeedExperience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub start_date: &'static str,
    pub end_date: Option<&'static str>,
    pub is_current: bool,
    pub description: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SeedSummary {
    pub projects: usize,
    pub skills: usize,
    pub experience: usize,
}

pub const PROJECTS: &[SeedProject] = &[
    SeedProject {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce platform built with React, Node.js, and MongoDB. Features include user \
                      authentication, product catalog, shopping cart, and payment integration.",
        technologies: &["React", "Node.js", "MongoDB", "Express", "Stripe", "JWT"],
        github_url: "https://github.com/watty-eventice/ecommerce-platform",
        live_url: "https://ecommerce-demo.com",
        featured: true,
    },
    SeedProject {
        title: "Task Management App",
        description: "A responsive task management application with drag-and-drop functionality, real-time updates, \
                      and team collaboration features.",
        technologies: &["React", "TypeScript", "Firebase", "Material-UI", "React DnD"],
        github_url: "https://github.com/watty-eventice/task-manager",
        live_url: "https://task-manager-demo.com",
        featured: true,
    },
    SeedProject {
        title: "Weather Dashboard",
        description: "A beautiful weather dashboard with location-based forecasts, interactive maps, and weather \
                      alerts using OpenWeatherMap API.",
        technologies: &["React", "OpenWeatherMap API", "Chart.js", "CSS3", "Geolocation"],
        github_url: "https://github.com/watty-eventice/weather-dashboard",
        live_url: "https://weather-dashboard-demo.com",
        featured: false,
    },
];

pub const SKILLS: &[SeedSkill] = &[
    SeedSkill { name: "React", category: "frontend", proficiency: 9 },
    SeedSkill { name: "JavaScript", category: "frontend", proficiency: 9 },
    SeedSkill { name: "TypeScript", category: "frontend", proficiency: 8 },
    SeedSkill { name: "HTML5", category: "frontend", proficiency: 10 },
    SeedSkill { name: "CSS3", category: "frontend", proficiency: 9 },
    SeedSkill { name: "Tailwind CSS", category: "frontend", proficiency: 8 },
    SeedSkill { name: "Node.js", category: "backend", proficiency: 7 },
    SeedSkill { name: "Express", category: "backend", proficiency: 7 },
    SeedSkill { name: "MongoDB", category: "backend", proficiency: 6 },
    SeedSkill { name: "Git", category: "tools", proficiency: 8 },
    SeedSkill { name: "Webpack", category: "tools", proficiency: 7 },
    SeedSkill { name: "Figma", category: "tools", proficiency: 6 },
];

pub const EXPERIENCE: &[SeedExperience] = &[
    SeedExperience {
        title: "Senior Frontend Developer",
        company: "TechCorp Solutions",
        location: "San Francisco, CA",
        start_date: "2022-01",
        end_date: None,
        is_current: true,
        description: &[
            "Led frontend development for 5+ enterprise web applications using React and TypeScript",
            "Improved application performance by 40% through code optimization and lazy loading",
            "Mentored 3 junior developers and conducted code reviews",
            "Collaborated with UX/UI team to implement responsive and accessible designs",
        ],
    },
    SeedExperience {
        title: "Frontend Developer",
        company: "StartupXYZ",
        location: "Remote",
        start_date: "2020-06",
        end_date: Some("2021-12"),
        is_current: false,
        description: &[
            "Developed and maintained React-based SaaS platform serving 10,000+ users",
            "Implemented real-time features using WebSockets and Socket.io",
            "Built responsive UI components with Material-UI and custom CSS",
            "Integrated third-party APIs and payment gateways",
        ],
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Replace projects, skills and experience with the demo data set.
///
/// # Errors
///
/// Returns [`PortfolioError::Database`] if any statement fails; the
/// transaction is rolled back on drop.
pub async fn seed_demo_data(pool: &PgPool) -> Result<SeedSummary, PortfolioError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM projects").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM skills").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM experiences").execute(&mut *tx).await?;

    for (age_secs, p) in (0_i32..).zip(PROJECTS) {
        sqlx::query(
            r"INSERT INTO projects (title, description, technologies, featured, github_url, live_url, created_at)
              VALUES ($1, $2, $3, $4, $5, $6, now() - ($7 * interval '1 second'))",
        )
        .bind(p.title)
        .bind(p.description)
        .bind(owned(p.technologies))
        .bind(p.featured)
        .bind(p.github_url)
        .bind(p.live_url)
        .bind(age_secs)
        .execute(&mut *tx)
        .await?;
    }

    for s in SKILLS {
        sqlx::query("INSERT INTO skills (name, category, proficiency) VALUES ($1, $2, $3)")
            .bind(s.name)
            .bind(s.category)
            .bind(s.proficiency)
            .execute(&mut *tx)
            .await?;
    }

    for e in EXPERIENCE {
        sqlx::query(
            r"INSERT INTO experiences (title, company, location, start_date, end_date, is_current, description)
              VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(e.title)
        .bind(e.company)
        .bind(e.location)
        .bind(e.start_date)
        .bind(e.end_date)
        .bind(e.is_current)
        .bind(owned(e.description))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(SeedSummary { projects: PROJECTS.len(), skills: SKILLS.len(), experience: EXPERIENCE.len() })
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
