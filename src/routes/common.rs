//! Operational routes: liveness, database readiness with pool usage, build info.

use crate::handlers::not_found;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// Readiness plus a snapshot of the connection pool.
#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
    connections: u32,
    idle_connections: usize,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn live() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let reachable = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "database unreachable");
            false
        }
    };
    let (status, label, database) = if reachable {
        (StatusCode::OK, "ok", "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
    };
    let body = Readiness {
        status: label,
        database,
        connections: state.pool.size(),
        idle_connections: state.pool.num_idle(),
    };
    (status, Json(body))
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live).fallback(not_found))
        .route("/ready", get(ready).fallback(not_found))
        .route("/version", get(build_info).fallback(not_found))
        .with_state(state)
}
