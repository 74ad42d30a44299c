use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::photo;
use crate::state::AppState;

/// Headroom for multipart boundaries and part headers on top of the photo.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Photo routes mounted at `/photos`.
///
/// ```text
/// POST   /          -> upload (multipart, `file` field)
/// ```
pub fn router(max_photo_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", post(photo::upload))
        .layer(DefaultBodyLimit::max(body_limit(max_photo_bytes)))
}

/// Request body cap for uploads: the photo limit plus multipart framing.
fn body_limit(max_photo_bytes: usize) -> usize {
    max_photo_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES)
}
