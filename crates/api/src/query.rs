//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /passports`.
#[derive(Debug, Default, Deserialize)]
pub struct ListPassportsParams {
    /// Case-insensitive substring over first name, last name and number.
    pub search: Option<String>,
}
