use regex::Regex;

use crate::errors::AppError;

pub fn validate_name(name: &str) -> bool {
    // Trimmed name must be at least 2 characters
    name.trim().chars().count() >= 2
}

pub fn validate_phone(phone: &str) -> Result<bool, AppError> {
    // Optional +91, 91 or 0 prefix (the +91/91 forms may be followed
    // by one space or hyphen), then exactly 10 digits.
    // First of the 10 digits must be 6-9 (Indian mobile ranges).
    let re = Regex::new(r"^(?:\+91[\s-]?|91[\s-]?|0)?[6-9]\d{9}$")?;
    Ok(re.is_match(phone))
}

pub fn name_requirement() -> String {
    "Name must be at least 2 characters".to_string()
}

pub fn phone_requirement() -> String {
    "Phone must be a valid Indian mobile number: 10 digits starting with 6-9, \
    optionally prefixed with +91, 91 or 0"
        .to_string()
}
