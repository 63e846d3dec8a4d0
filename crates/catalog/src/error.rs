//! Shared plumbing for the per-entity error enums.
//!
//! Every entity error carries `NotFound(<typed id>)`, `AlreadyExists(String)` and
//! `Storage(StorageError)` so store-level failures keep their meaning after conversion.

/// `impl From<FrameworkError>` for an entity error whose `NotFound` holds `$id`.
macro_rules! from_framework_error {
    ($error:ident, $id:ident) => {
        impl From<store_framework::FrameworkError> for $error {
            fn from(e: store_framework::FrameworkError) -> Self {
                match e {
                    store_framework::FrameworkError::NotFound { id, .. } => {
                        Self::NotFound($crate::model::$id(id))
                    }
                    store_framework::FrameworkError::AlreadyExists { key, .. } => {
                        Self::AlreadyExists(key)
                    }
                    store_framework::FrameworkError::Storage(e) => Self::Storage(e),
                }
            }
        }
    };
}

pub(crate) use from_framework_error;

/// Rejects blank strings for required text fields.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(())
}

/// Money amounts must be finite and non-negative.
pub(crate) fn require_amount(field: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{field} must be a non-negative number, got {value}"));
    }
    Ok(())
}
