use axum::routing::get;
use axum::Router;

use crate::handlers::passport;
use crate::state::AppState;

/// Passport routes mounted at `/passports`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(passport::list).post(passport::create))
        .route(
            "/{id}",
            get(passport::get_by_id)
                .put(passport::update)
                .delete(passport::delete),
        )
}
