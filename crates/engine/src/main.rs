//! Grimroll Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::http::header::HeaderName;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grimroll_engine::api::{self, rate_limit, ApiState, UserRateLimiter};
use grimroll_engine::infrastructure::sqlite;
use grimroll_engine::{App, EngineConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grimroll_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Grimroll Engine");

    let config = EngineConfig::from_env();

    tracing::info!(database_url = %config.database_url, "Opening SQLite database");
    let pool = sqlite::connect(&config.database_url, config.database_max_connections).await?;

    let app = Arc::new(App::new(pool));

    let rate_limiter = Arc::new(UserRateLimiter::new(
        config.rate_limit_per_minute,
        config.rate_limit_burst,
    ));
    if rate_limiter.is_enabled() {
        tracing::info!(
            per_minute = config.rate_limit_per_minute,
            burst = config.rate_limit_burst,
            "Skill check rate limiting enabled"
        );

        // Sweep idle buckets so the map tracks only recently active users.
        let limiter = rate_limiter.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(rate_limit::PRUNE_INTERVAL);
            loop {
                interval.tick().await;
                let removed = limiter.prune(Instant::now());
                if removed > 0 {
                    tracing::debug!(
                        removed,
                        remaining = limiter.tracked_users(),
                        "Pruned idle rate limit buckets"
                    );
                }
            }
        });
    } else {
        tracing::warn!("Skill check rate limiting disabled");
    }

    let state = ApiState::new(app, config.user_id_header.clone(), rate_limiter);

    let mut router = api::http::routes(state).layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(&config) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(config: &EngineConfig) -> Option<CorsLayer> {
    let allowed_origins = config.cors_allowed_origins.as_deref()?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        // Clients send the identity header and JSON bodies, both of which trigger preflights.
        .allow_headers([
            config.user_id_header.clone(),
            HeaderName::from_static("content-type"),
        ]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
