use std::time::Duration;

use axum::extract::{Multipart, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use press_codec::Algorithm;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::response::{HealthResponse, TransformResponse};
use crate::transform::TransformService;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: TransformService,
    pub config: ServerConfig,
}

/// One uploaded `file` field: declared name plus content.
struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

/// Drain the multipart stream, keeping the `file` and `algorithm` fields.
async fn read_upload(
    multipart: &mut Multipart,
) -> ServerResult<(Option<Upload>, Option<String>)> {
    let mut upload = None;
    let mut algorithm = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(ToOwned::to_owned);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field.bytes().await?.to_vec();
                upload = Some(Upload { file_name, bytes });
            }
            Some("algorithm") => {
                algorithm = Some(field.text().await?);
            }
            _ => {}
        }
    }
    Ok((upload, algorithm))
}

pub async fn compress_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ServerResult<Json<TransformResponse>> {
    let (upload, algorithm) = read_upload(&mut multipart).await?;
    let upload = upload.ok_or(ServerError::MissingInput)?;
    let outcome = state
        .service
        .compress(&upload.file_name, algorithm.as_deref(), upload.bytes)
        .await?;
    Ok(Json(outcome.into_response()))
}

pub async fn decompress_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ServerResult<Json<TransformResponse>> {
    let (upload, _) = read_upload(&mut multipart).await?;
    let upload = upload.ok_or(ServerError::MissingInput)?;
    let outcome = state
        .service
        .decompress(&upload.file_name, upload.bytes)
        .await?;
    Ok(Json(outcome.into_response()))
}

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub file: Option<String>,
}

/// Serve a staged artifact and remove it afterward (single delivery).
///
/// The bytes are fully buffered before the response is built, so with a
/// zero grace period deletion can run inline; otherwise it is scheduled
/// after a short delay to tolerate slow consumers.
pub async fn download_handler(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> ServerResult<Response> {
    let key = query.file.ok_or(ServerError::MissingFileName)?;
    let bytes = state.service.deliver(&key)?;

    let grace = Duration::from_millis(state.config.delete_grace_ms);
    let service = state.service.clone();
    if grace.is_zero() {
        discard_delivered(&service, &key);
    } else {
        let key = key.clone();
        tokio::spawn(async move {
            tokio::time::sleep(grace).await;
            discard_delivered(&service, &key);
        });
    }

    let disposition = format!("attachment; filename=\"{key}\"");
    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

fn discard_delivered(service: &TransformService, key: &str) {
    if let Err(e) = service.discard(key) {
        warn!(%key, error = %e, "failed to delete delivered artifact");
    }
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Service banner at the root path.
pub async fn index_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Press compression portal API",
        "algorithms": Algorithm::ALL.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
        "endpoints": ["/api/compress", "/api/decompress", "/api/download"],
    }))
}
