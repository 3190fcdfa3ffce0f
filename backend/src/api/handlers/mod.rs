use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use log::{error, warn};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use serde_json::json;

use crate::config::settings::AppConfig;
use crate::database::{self, DbConn};
use crate::errors::{AppError, AppResult};

pub mod games;
pub mod mentorships;
pub mod players;
pub mod relations;
pub mod skill_levels;
pub mod tournaments;
pub mod violations;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
    pub config: AppConfig,
}

impl AppState {
    /// One pooled connection per request, returned to the pool on drop
    pub fn connection(&self) -> AppResult<DbConn> {
        Ok(database::get_connection(&self.pool)?)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            AppError::Validation(detail) => (StatusCode::BAD_REQUEST, detail),
            AppError::Conflict(detail) => (StatusCode::CONFLICT, detail),
            AppError::Internal(err) => {
                error!("Request failed: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        if !status.is_server_error() {
            warn!("{}: {}", status, detail);
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
