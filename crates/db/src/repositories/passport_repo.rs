//! Repository for the `passports` table.

use passport_core::types::DbId;
use sqlx::PgPool;

use crate::models::passport::{CreatePassport, Passport, UpdatePassport};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, date_of_birth, nationality, passport_number, \
     issue_date, expiry_date, photo, created_at, updated_at";

/// Unique constraint guarding `passport_number`.
pub const PASSPORT_NUMBER_CONSTRAINT: &str = "uq_passports_passport_number";

/// Provides CRUD operations for passport records.
pub struct PassportRepo;

impl PassportRepo {
    /// Insert a new passport, returning the created row.
    ///
    /// `created_at` and `updated_at` come from the database defaults.
    pub async fn create(pool: &PgPool, input: &CreatePassport) -> Result<Passport, sqlx::Error> {
        let query = format!(
            "INSERT INTO passports
                (first_name, last_name, date_of_birth, nationality, passport_number,
                 issue_date, expiry_date, photo)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Passport>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.date_of_birth)
            .bind(&input.nationality)
            .bind(&input.passport_number)
            .bind(input.issue_date)
            .bind(input.expiry_date)
            .bind(&input.photo)
            .fetch_one(pool)
            .await
    }

    /// Find a passport by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Passport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM passports WHERE id = $1");
        sqlx::query_as::<_, Passport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all passports, newest first. `id` breaks ties between rows
    /// created in the same transaction.
    pub async fn list(pool: &PgPool) -> Result<Vec<Passport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM passports ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Passport>(&query).fetch_all(pool).await
    }

    /// Whether a passport number is already on record, optionally ignoring
    /// one row (the record being edited).
    pub async fn exists_by_number(
        pool: &PgPool,
        passport_number: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM passports
                WHERE passport_number = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(passport_number)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Update a passport. Only non-`None` fields in `input` are applied and
    /// `updated_at` is refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePassport,
    ) -> Result<Option<Passport>, sqlx::Error> {
        let query = format!(
            "UPDATE passports SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                date_of_birth = COALESCE($4, date_of_birth),
                nationality = COALESCE($5, nationality),
                passport_number = COALESCE($6, passport_number),
                issue_date = COALESCE($7, issue_date),
                expiry_date = COALESCE($8, expiry_date),
                photo = COALESCE($9, photo),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Passport>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.date_of_birth.flatten())
            .bind(&input.nationality)
            .bind(&input.passport_number)
            .bind(input.issue_date.flatten())
            .bind(input.expiry_date.flatten())
            .bind(&input.photo)
            .fetch_optional(pool)
            .await
    }

    /// Whether `err` is a unique violation on the passport number, i.e. a
    /// concurrent write claimed the number after the pre-check passed.
    pub fn is_number_conflict(err: &sqlx::Error) -> bool {
        err.as_database_error().is_some_and(|db_err| {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(PASSPORT_NUMBER_CONSTRAINT)
        })
    }

    /// Permanently delete a passport by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM passports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
