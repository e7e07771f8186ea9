//! Input validation helpers
//!
//! Text length caps live here so the catalog and the command actions
//! agree on them. redb values carry no built-in length enforcement, so
//! oversized input has to be rejected before it reaches storage.

use crate::services::catalog_service::CatalogError;

// ── Length caps ─────────────────────────────────────────────────────

/// Entity names: menu item, category, customer
pub const MAX_NAME_LEN: usize = 200;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (catalog mutations) ──────────────────────────

/// A required string: non-blank and within the cap
pub fn validate_required_text(
    value: &str,
    field: &str,
    max_len: usize,
) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::Validation(format!(
            "{field} must not be empty"
        )));
    }
    if value.len() > max_len {
        return Err(CatalogError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// An optional string: checked against the cap only when present
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), CatalogError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(CatalogError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_empty_and_overlong() {
        assert!(validate_required_text("Paella", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(MAX_NAME_LEN + 1), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text_checks_only_when_present() {
        assert!(validate_optional_text(&None, "image", MAX_URL_LEN).is_ok());
        assert!(validate_optional_text(&Some("a.png".to_string()), "image", MAX_URL_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(MAX_URL_LEN + 1)), "image", MAX_URL_LEN).is_err());
    }
}
