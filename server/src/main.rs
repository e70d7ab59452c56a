#![recursion_limit = "256"]

mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::services::notify::{ContactNotifier, ResendNotifier};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let pool = db::init_pool(&config.database_url)
        .await
        .expect("database init failed");

    // Owner notification is optional: contact messages are stored either way.
    let notifier: Option<Arc<dyn ContactNotifier>> = match &config.notify {
        Some(notify) => {
            tracing::info!(to = %notify.to, "contact notifications enabled");
            Some(Arc::new(ResendNotifier::new(notify)))
        }
        None => {
            tracing::warn!("RESEND_API_KEY / RESEND_FROM / CONTACT_NOTIFY_TO not set; contact notifications disabled");
            None
        }
    };

    let state = state::AppState::new(pool, notifier);

    let app = routes::leptos_app(state, &config).expect("leptos app init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portfolio listening");
    axum::serve(listener, app).await.expect("server failed");
}
