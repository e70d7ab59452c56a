//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API under `/api` and stitches it with Leptos
//! SSR rendering under a single Axum router. Compiled client assets are
//! served from the Leptos site root.

pub mod contact;
pub mod portfolio;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use axum::response::Json;
use axum::routing::{get, post};
use leptos::prelude::get_configuration;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Error half of every API handler: status plus `{ "error": "..." }`.
pub(crate) type ApiError = (StatusCode, Json<serde_json::Value>);

pub(crate) fn error_body(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

/// Parse `CORS_ALLOW_ORIGIN`. `None` means any origin.
pub(crate) fn allowed_origins(raw: &str) -> Option<Vec<HeaderValue>> {
    if raw.trim() == "*" {
        return None;
    }
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty() && *o != "*")
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    Some(origins)
}

fn cors_layer(raw: &str) -> CorsLayer {
    let origin = match allowed_origins(raw) {
        None => AllowOrigin::any(),
        Some(list) => AllowOrigin::list(list),
    };
    CorsLayer::new().allow_origin(origin).allow_methods(Any).allow_headers(Any)
}

/// JSON API routes consumed by the client pages and admin tooling.
pub(crate) fn api_routes(state: AppState, cors_allow_origin: &str) -> Router {
    Router::new()
        .route("/api", get(api_root))
        .route("/api/", get(api_root))
        .route("/api/skills", get(portfolio::list_skills))
        .route("/api/skills/{category}", get(portfolio::list_skills_by_category))
        .route("/api/projects", get(portfolio::list_projects).post(portfolio::create_project))
        .route("/api/projects/featured", get(portfolio::list_featured_projects))
        .route("/api/experience", get(portfolio::list_experience))
        .route("/api/contact", get(contact::list_contact_messages).post(contact::submit_contact))
        .route("/api/seed-data", post(portfolio::seed_data))
        .route("/healthz", get(healthz))
        .layer(cors_layer(cors_allow_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Full application: API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState, config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, CSS and JS bundles plus anything copied from the assets dir.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state, &config.cors_allow_origin)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path)))
}

async fn api_root() -> Json<serde_json::Value> {
    Json(json!({
        "message": format!(
            "{} Portfolio API - Welcome to my developer portfolio backend",
            client::content::OWNER_NAME
        )
    }))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
