//! Passport record rules: required fields, input normalization, duplicate
//! reporting and list search matching.

use validator::ValidateUrl;

use crate::error::CoreError;

/// Entity name used in `CoreError::NotFound` and log fields.
pub const ENTITY: &str = "Passport";

/// Fields that must be present and non-blank on every record, in form order.
pub const REQUIRED_FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "date_of_birth",
    "nationality",
    "passport_number",
    "issue_date",
    "expiry_date",
];

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Trim surrounding whitespace from a text field.
pub fn normalize(value: &str) -> String {
    value.trim().to_string()
}

/// Trim an optional text field, collapsing blank values to `None`.
pub fn normalize_opt(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Whether a submitted text value counts as filled in.
pub fn is_filled(value: &str) -> bool {
    !is_blank(value)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Which required fields a request leaves filled in. `true` means the
/// field will hold a usable value once the request is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPresence {
    pub first_name: bool,
    pub last_name: bool,
    pub date_of_birth: bool,
    pub nationality: bool,
    pub passport_number: bool,
    pub issue_date: bool,
    pub expiry_date: bool,
}

impl FieldPresence {
    /// Every required field filled in.
    pub const ALL: Self = Self {
        first_name: true,
        last_name: true,
        date_of_birth: true,
        nationality: true,
        passport_number: true,
        issue_date: true,
        expiry_date: true,
    };

    /// Names of the fields left empty, in [`REQUIRED_FIELDS`] order.
    pub fn missing(&self) -> Vec<&'static str> {
        let filled = [
            self.first_name,
            self.last_name,
            self.date_of_birth,
            self.nationality,
            self.passport_number,
            self.issue_date,
            self.expiry_date,
        ];
        REQUIRED_FIELDS
            .iter()
            .zip(filled)
            .filter(|(_, filled)| !filled)
            .map(|(field, _)| *field)
            .collect()
    }
}

/// Reject a request that leaves any required field empty.
///
/// The error message lists every missing field.
pub fn validate_required(presence: &FieldPresence) -> Result<(), CoreError> {
    let missing = presence.missing();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing_fields_error(&missing))
    }
}

fn missing_fields_error(missing: &[&str]) -> CoreError {
    CoreError::Validation(format!(
        "Please fill in all required fields: {}",
        missing.join(", ")
    ))
}

/// Validate a photo reference: must be an absolute `http(s)` URL.
pub fn validate_photo_url(url: &str) -> Result<(), CoreError> {
    let scheme_ok = url.starts_with("http://") || url.starts_with("https://");
    if scheme_ok && url.validate_url() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Photo must be an absolute http(s) URL, got '{url}'"
        )))
    }
}

/// The conflict reported when a passport number is already on record.
pub fn duplicate_number_error(passport_number: &str) -> CoreError {
    CoreError::Conflict(format!(
        "This passport number already exists in the database: {passport_number}"
    ))
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Case-insensitive substring match over `"{first} {last} {number}"`.
///
/// A blank term matches every record.
pub fn matches_search(
    first_name: &str,
    last_name: &str,
    passport_number: &str,
    term: &str,
) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    format!("{first_name} {last_name} {passport_number}")
        .to_lowercase()
        .contains(&term.to_lowercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
