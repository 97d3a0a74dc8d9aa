//! Input rules for the free-text prompts.
//!
//! Lengths are byte lengths, so a single multi-byte character already counts as several.

pub const MIN_DESCRIPTION_LEN: usize = 3;

pub fn validate_description(input: &str) -> Result<(), String> {
    if input.len() < MIN_DESCRIPTION_LEN {
        return Err(format!(
            "description must have at least {} characters",
            MIN_DESCRIPTION_LEN
        ));
    }
    Ok(())
}

pub fn validate_reviewer(input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err("reviewer name cannot be empty".to_string());
    }
    Ok(())
}

/// Issue references look like `#123`.
pub fn validate_issue_reference(input: &str) -> Result<(), String> {
    if !input.starts_with('#') {
        return Err("issue reference must start with #".to_string());
    }
    if input.len() < 2 {
        return Err("issue reference cannot be empty".to_string());
    }
    Ok(())
}
