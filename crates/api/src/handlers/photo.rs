//! Handler for passport photo uploads.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use passport_core::photo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadedPhoto {
    /// Generated object name.
    pub name: String,
    /// Public URL to store in a passport's `photo` field.
    pub url: String,
    pub size_bytes: usize,
}

/// POST /api/v1/photos
///
/// Accepts a multipart form with a required `file` field. The file is
/// stored under a fresh random name keeping its extension; an existing
/// object is never overwritten.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadedPhoto>>)> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;
            file_data = Some((filename, data.to_vec()));
        }
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let ext = photo::extension_of(&filename)?;
    photo::validate_size(data.len(), state.config.max_photo_bytes)?;
    photo::validate_content(&data, &ext)?;

    let name = photo::object_name(&ext);
    state.photo_store.upload(&name, &data).await?;
    let url = state.photo_store.public_url(&name);

    tracing::info!(name = %name, original = %filename, size = data.len(), "Photo uploaded");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadedPhoto {
                name,
                url,
                size_bytes: data.len(),
            },
        }),
    ))
}
