//! Passport entity model and DTOs.

use passport_core::passport::{is_filled, normalize, normalize_opt, FieldPresence};
use passport_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A row from the `passports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Passport {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    pub nationality: String,
    pub passport_number: String,
    pub issue_date: Date,
    pub expiry_date: Date,
    /// Public URL of the uploaded photo.
    pub photo: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new passport record.
///
/// Missing text fields deserialize as empty strings and missing or blank
/// dates as `None`, so presence is reported by validation rather than by
/// the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePassport {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, deserialize_with = "blank_date")]
    pub date_of_birth: Option<Date>,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub passport_number: String,
    #[serde(default, deserialize_with = "blank_date")]
    pub issue_date: Option<Date>,
    #[serde(default, deserialize_with = "blank_date")]
    pub expiry_date: Option<Date>,
    pub photo: Option<String>,
}

impl CreatePassport {
    /// Trim every text field; a blank photo becomes `None`.
    pub fn normalized(self) -> Self {
        Self {
            first_name: normalize(&self.first_name),
            last_name: normalize(&self.last_name),
            nationality: normalize(&self.nationality),
            passport_number: normalize(&self.passport_number),
            photo: normalize_opt(self.photo.as_deref()),
            ..self
        }
    }

    /// Which required fields this input fills in.
    pub fn presence(&self) -> FieldPresence {
        FieldPresence {
            first_name: is_filled(&self.first_name),
            last_name: is_filled(&self.last_name),
            date_of_birth: self.date_of_birth.is_some(),
            nationality: is_filled(&self.nationality),
            passport_number: is_filled(&self.passport_number),
            issue_date: self.issue_date.is_some(),
            expiry_date: self.expiry_date.is_some(),
        }
    }
}

/// DTO for updating an existing passport. Omitted (or `null`) fields keep
/// their stored value.
///
/// Dates are doubly optional: `Some(None)` records that the caller sent an
/// empty string, which validation rejects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePassport {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "blank_date_patch")]
    pub date_of_birth: Option<Option<Date>>,
    pub nationality: Option<String>,
    pub passport_number: Option<String>,
    #[serde(default, deserialize_with = "blank_date_patch")]
    pub issue_date: Option<Option<Date>>,
    #[serde(default, deserialize_with = "blank_date_patch")]
    pub expiry_date: Option<Option<Date>>,
    pub photo: Option<String>,
}

impl UpdatePassport {
    /// Trim supplied text fields. Required fields keep blank values so the
    /// caller's validation can reject them; a blank photo is dropped.
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.as_deref().map(normalize),
            last_name: self.last_name.as_deref().map(normalize),
            nationality: self.nationality.as_deref().map(normalize),
            passport_number: self.passport_number.as_deref().map(normalize),
            photo: normalize_opt(self.photo.as_deref()),
            ..self
        }
    }

    /// Which required fields stay filled once this patch is applied.
    /// Omitted fields keep their stored, already valid value.
    pub fn presence(&self) -> FieldPresence {
        let text = |v: &Option<String>| v.as_deref().is_none_or(is_filled);
        let date = |v: &Option<Option<Date>>| !matches!(v, Some(None));
        FieldPresence {
            first_name: text(&self.first_name),
            last_name: text(&self.last_name),
            date_of_birth: date(&self.date_of_birth),
            nationality: text(&self.nationality),
            passport_number: text(&self.passport_number),
            issue_date: date(&self.issue_date),
            expiry_date: date(&self.expiry_date),
        }
    }
}

/// `null`, `""` and whitespace become `None`; anything else must be a
/// `YYYY-MM-DD` date.
fn blank_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    parse_date(raw.as_deref().unwrap_or_default())
}

/// Like [`blank_date`], but a `null` leaves the column untouched while a
/// blank string is kept as `Some(None)`.
fn blank_date_patch<'de, D>(deserializer: D) -> Result<Option<Option<Date>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_date(&raw).map(Some),
    }
}

fn parse_date<E: serde::de::Error>(raw: &str) -> Result<Option<Date>, E> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<Date>()
        .map(Some)
        .map_err(|e| E::custom(format!("invalid date '{raw}': {e}")))
}
