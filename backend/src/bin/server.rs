//! Scheduler HTTP Server Binary
//!
//! Initializes the repository, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! REPOSITORY_SEED=backend/data/sample_lines.json cargo run --bin scheduler-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: Repository backend when no repository.toml is found (default: local)
//! - `REPOSITORY_SEED`: JSON seed file for the local repository
//! - `RUST_LOG`: Log filter directives, e.g. `subway_scheduler=debug` (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use subway_scheduler::db;
use subway_scheduler::http::{create_router, AppState};

/// Build the log filter from a `RUST_LOG` directive string such as
/// `subway_scheduler=debug,tower_http=info`. Missing or invalid input means `info`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting subway scheduler HTTP server");

    db::init_repository()?;
    let repository = std::sync::Arc::clone(db::get_repository()?);

    let state = AppState::new(repository);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
