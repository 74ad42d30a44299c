//! Passport photo rules: accepted formats, size limit and object naming.

use image::ImageFormat;
use uuid::Uuid;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Bucket (directory / URL segment) holding passport photos.
pub const PHOTO_BUCKET: &str = "passport-photos";

/// Default maximum upload size (10 MiB).
pub const DEFAULT_MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

/// `Cache-Control` value for served photos.
pub const PHOTO_CACHE_CONTROL: &str = "max-age=3600";

/// Accepted file extensions (lower-case).
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Extract the lower-cased extension of an uploaded file name and check it
/// against [`ALLOWED_EXTENSIONS`].
pub fn extension_of(file_name: &str) -> Result<String, CoreError> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported photo file '{file_name}'. Supported: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )))
    }
}

/// Reject empty uploads and uploads larger than `max_bytes`.
pub fn validate_size(len: usize, max_bytes: usize) -> Result<(), CoreError> {
    if len == 0 {
        return Err(CoreError::Validation("Photo file is empty".into()));
    }
    if len > max_bytes {
        return Err(CoreError::Validation(format!(
            "Photo is {len} bytes, the limit is {max_bytes} bytes"
        )));
    }
    Ok(())
}

/// Check that `bytes` sniff as an image in the format the extension claims.
pub fn validate_content(bytes: &[u8], ext: &str) -> Result<(), CoreError> {
    let expected = match ext {
        "png" => ImageFormat::Png,
        "jpg" | "jpeg" => ImageFormat::Jpeg,
        "gif" => ImageFormat::Gif,
        "webp" => ImageFormat::WebP,
        other => {
            return Err(CoreError::Validation(format!(
                "Unsupported photo extension '.{other}'"
            )))
        }
    };

    match image::guess_format(bytes) {
        Ok(actual) if actual == expected => Ok(()),
        Ok(actual) => Err(CoreError::Validation(format!(
            "Photo content is {actual:?} but the file name says '.{ext}'"
        ))),
        Err(_) => Err(CoreError::Validation(
            "Photo content is not a recognised image".into(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// Generate a fresh random object name keeping the original extension.
pub fn object_name(ext: &str) -> String {
    format!("{}.{ext}", Uuid::new_v4())
}

/// Object names may only contain ASCII alphanumerics, `-`, `_` and `.`,
/// and may not start with a dot.
pub fn is_valid_object_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
