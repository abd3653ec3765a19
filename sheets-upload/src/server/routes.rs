//! Route handlers

use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use log::{debug, error, info, warn};

use super::response::success_message;
use super::state::AppState;
use crate::error::{AppError, ValidationError};
use crate::extract::load_table;
use crate::upload::{UploadedFile, receive_file, stage_file};

/// The static upload form
pub const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Rows written to the debug log after cleaning
const PREVIEW_ROWS: usize = 5;

/// Build the application router
pub fn router(state: AppState) -> Router {
    let limit = state.config.max_upload_bytes;
    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload))
        .layer(DefaultBodyLimit::max(limit))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    match process_upload(&state, multipart).await {
        Ok(staged) => (StatusCode::OK, success_message(&staged.filename)).into_response(),
        Err(err) => {
            if err.is_validation() {
                warn!("Upload rejected: {}", err);
            } else {
                error!("Upload failed ({}): {}", err.kind(), err);
            }
            err.into_response()
        }
    }
}

/// Validate, stage, extract and append one upload
async fn process_upload(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<UploadedFile, AppError> {
    let mut multipart = multipart.map_err(|rejection| {
        debug!("Request is not multipart: {}", rejection);
        AppError::from(ValidationError::NoFilePart)
    })?;

    let part = receive_file(&mut multipart).await?;
    let staged = stage_file(
        &state.config.upload_dir,
        &part.original_name,
        &part.filename,
        &part.bytes,
    )
    .await?;
    info!(
        "Received {} as {} ({})",
        staged.original_name,
        staged.path.display(),
        staged.extension
    );

    let path = staged.path.clone();
    let columns = state.columns.clone();
    let table = tokio::task::spawn_blocking(move || load_table(&path, &columns))
        .await
        .map_err(|e| AppError::Parse(format!("extraction task failed: {}", e)))??;

    info!("Extracted {} rows from {}", table.len(), staged.filename);
    debug!("First rows:\n{}", table.preview(PREVIEW_ROWS));

    let sink = state.connector.connect().await?;
    info!("Appending to {}", sink.label());
    sink.append_rows(table.rows()).await?;

    Ok(staged)
}
