pub mod health;
pub mod passports;
pub mod photos;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /passports                 list (?search=), create
/// /passports/{id}            get, update, delete
/// /photos                    upload (multipart)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/passports", passports::router())
        .nest("/photos", photos::router(config.max_photo_bytes))
}
