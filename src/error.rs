use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Every failure a handler can report. Converted to an HTTP status plus a
/// `{ success: false, error }` body at the handler boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// The identity service answered with a non-zero `errcode`.
    #[error("WeChat login failed: {errmsg}")]
    Upstream { errcode: i64, errmsg: String },

    /// The identity service could not be reached, timed out, or sent garbage.
    #[error("{0}")]
    UpstreamUnavailable(String),

    #[error("{0}")]
    Configuration(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Upstream { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable(_) | AppError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Upstream { errcode, errmsg } => json!({
                "success": false,
                "error": self.to_string(),
                "errcode": errcode,
                "errmsg": errmsg,
            }),
            _ => json!({ "success": false, "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
