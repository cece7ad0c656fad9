// src/models/validation.rs
// Shared validator hooks for request DTOs

use validator::ValidationError;

/// Rejects text that is empty once trimmed
/// Repositories store the trimmed value, so `"   "` must not pass `length(min = 1)`
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_rejected() {
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
        assert!(validate_not_blank(" Latte ").is_ok());
    }
}
