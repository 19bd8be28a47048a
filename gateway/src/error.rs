use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;
use wordbook_core::DefineError;

use crate::api::ErrorResponse;

/// Every failure surfaces as a 500 with a `detail` message.
pub struct AppError(DefineError);

impl From<DefineError> for AppError {
    fn from(err: DefineError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = match &self.0 {
            DefineError::Format => self.0.to_string(),
            DefineError::Upstream(_) => {
                error!("Upstream failure: {:?}", self.0);
                format!("에러 발생: {}", self.0)
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { detail })).into_response()
    }
}
