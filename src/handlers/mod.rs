use axum::extract::State;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sqlx::PgPool;

use crate::utils::error::AppError;
use crate::utils::response::success;

pub const SERVICE_NAME: &str = "moonstream-db";

#[derive(Serialize)]
struct PingPayload {
    status: &'static str,
    service: &'static str,
}

const PING_OK: PingPayload = PingPayload {
    status: "ok",
    service: SERVICE_NAME,
};

/// Process liveness. Never touches the database.
pub async fn ping() -> Response {
    success(PING_OK, "Server is running")
}

/// Round-trips a trivial query through the pool.
pub async fn ping_db(State(pool): State<PgPool>) -> Result<Response, AppError> {
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(success(PING_OK, "Database is reachable"))
}

pub async fn not_found(uri: Uri) -> Response {
    AppError::NotFound(format!("No route for '{}'", uri.path())).into_response()
}
