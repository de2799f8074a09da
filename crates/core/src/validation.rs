//! Dog age validation.

use crate::error::CoreError;

/// Youngest accepted age in years.
pub const MIN_DOG_AGE: f64 = 0.0;

/// Oldest accepted age in years.
pub const MAX_DOG_AGE: f64 = 20.0;

/// Validate that a dog's age lies within `[0, 20]` years, inclusive.
pub fn validate_dog_age(age: f64) -> Result<f64, CoreError> {
    if !(MIN_DOG_AGE..=MAX_DOG_AGE).contains(&age) {
        return Err(CoreError::Validation(format!(
            "Dog age must be between {MIN_DOG_AGE} and {MAX_DOG_AGE} years. Got: {age}"
        )));
    }
    Ok(age)
}

/// Parse a textual age and validate it.
pub fn parse_dog_age(raw: &str) -> Result<f64, CoreError> {
    let age: f64 = raw.trim().parse().map_err(|_| {
        CoreError::Validation(format!("Dog age must be a valid number. Got: {raw}"))
    })?;
    validate_dog_age(age)
}
