//! Handlers for the `/passports` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use passport_core::error::CoreError;
use passport_core::passport::{self as rules, ENTITY};
use passport_core::types::DbId;
use passport_db::models::passport::{CreatePassport, Passport, UpdatePassport};
use passport_db::repositories::PassportRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListPassportsParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// Report a unique violation on the passport number the same way as the
/// pre-insert check does.
fn number_conflict(err: sqlx::Error, passport_number: &str) -> AppError {
    if PassportRepo::is_number_conflict(&err) {
        rules::duplicate_number_error(passport_number).into()
    } else {
        err.into()
    }
}

/// GET /api/v1/passports
///
/// Newest first. `?search=` narrows the list to records whose
/// "first last number" text contains the term, ignoring case.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListPassportsParams>,
) -> AppResult<Json<DataResponse<Vec<Passport>>>> {
    let mut passports = PassportRepo::list(&state.pool).await?;

    if let Some(term) = params.search.as_deref() {
        passports.retain(|p| {
            rules::matches_search(&p.first_name, &p.last_name, &p.passport_number, term)
        });
    }

    Ok(Json(DataResponse { data: passports }))
}

/// POST /api/v1/passports
///
/// Rejects missing required fields, then rejects a passport number that is
/// already on record. The check and the insert are separate statements; a
/// unique violation from the insert is reported with the same message.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePassport>,
) -> AppResult<(StatusCode, Json<DataResponse<Passport>>)> {
    let input = input.normalized();
    rules::validate_required(&input.presence())?;
    if let Some(photo) = input.photo.as_deref() {
        rules::validate_photo_url(photo)?;
    }

    if PassportRepo::exists_by_number(&state.pool, &input.passport_number, None).await? {
        return Err(rules::duplicate_number_error(&input.passport_number).into());
    }

    let passport = PassportRepo::create(&state.pool, &input)
        .await
        .map_err(|e| number_conflict(e, &input.passport_number))?;

    tracing::info!(
        passport_id = passport.id,
        passport_number = %passport.passport_number,
        "Passport created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: passport })))
}

/// GET /api/v1/passports/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Passport>>> {
    let passport = PassportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: passport }))
}

/// PUT /api/v1/passports/{id}
///
/// Applies the supplied fields. Blanking a required field is rejected. A new
/// passport number gets the same duplicate check as on create, ignoring the
/// record being edited.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePassport>,
) -> AppResult<Json<DataResponse<Passport>>> {
    let input = input.normalized();
    rules::validate_required(&input.presence())?;
    if let Some(photo) = input.photo.as_deref() {
        rules::validate_photo_url(photo)?;
    }

    if let Some(number) = input.passport_number.as_deref() {
        if PassportRepo::exists_by_number(&state.pool, number, Some(id)).await? {
            return Err(rules::duplicate_number_error(number).into());
        }
    }

    let passport = PassportRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| match input.passport_number.as_deref() {
            Some(number) => number_conflict(e, number),
            None => e.into(),
        })?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(passport_id = id, "Passport updated");

    Ok(Json(DataResponse { data: passport }))
}

/// DELETE /api/v1/passports/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PassportRepo::delete(&state.pool, id).await? {
        tracing::info!(passport_id = id, "Passport deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
