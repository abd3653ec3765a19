//! Mapping pipeline outcomes to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Body returned after a successful upload
pub fn success_message(filename: &str) -> String {
    format!(
        "Arquivo {} carregado com sucesso e dados enviados ao Google Sheets!",
        filename
    )
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RemoteNotFound(_) => StatusCode::BAD_GATEWAY,
            AppError::RemoteWrite(_) => StatusCode::BAD_GATEWAY,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body: the literal message for validation errors,
    /// `Ocorreu um erro: ...` for everything else
    pub fn body(&self) -> String {
        match self {
            AppError::Validation(v) => v.to_string(),
            other => format!("Ocorreu um erro: {}", other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.body()).into_response()
    }
}
