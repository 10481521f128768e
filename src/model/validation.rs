use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use thiserror::Error;

use super::registration::{Gender, RegistrationInput};

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Gender,
    CurrentCity,
}

impl Field {
    /// Stable key matching the JSON payload field names.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Gender => "gender",
            Field::CurrentCity => "currentCity",
        }
    }
}

/// Validation errors for registration form fields.
///
/// The display strings are user-facing and rendered next to the offending
/// field; they are never sent over the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Phone number must be exactly 10 digits")]
    InvalidPhone,
    #[error("Gender is required")]
    GenderRequired,
    #[error("Current city is required")]
    CityRequired,
}

// RFC-lite: word chars, dots and hyphens in the local part, one or more
// dot-separated domain labels, final label 2-4 chars.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").expect("valid hardcoded regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("valid hardcoded regex"));

/// Validates a name: must be non-empty after trimming whitespace.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::NameRequired)
    } else {
        Ok(())
    }
}

/// Validates an email address against the RFC-lite pattern.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates a phone number: exactly 10 decimal digits.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Validates the gender selection: one of the options must be picked.
pub fn validate_gender(gender: Option<Gender>) -> Result<(), ValidationError> {
    match gender {
        Some(_) => Ok(()),
        None => Err(ValidationError::GenderRequired),
    }
}

/// Validates the current city: must be non-empty after trimming whitespace.
pub fn validate_city(city: &str) -> Result<(), ValidationError> {
    if city.trim().is_empty() {
        Err(ValidationError::CityRequired)
    } else {
        Ok(())
    }
}

/// Per-field validation errors, ordered by form layout.
///
/// An empty map means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(IndexMap<Field, ValidationError>);

impl ValidationErrors {
    /// Returns `true` if no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Records an error for a field, replacing any previous entry.
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    /// Returns the error for a field, if any.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Returns `true` if the given field has an error.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Iterates over `(field, error)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(f, e)| (*f, e))
    }
}

/// Validates a full [`RegistrationInput`], collecting every violated field.
///
/// Pure function of the input; recomputed in full on each submit attempt.
pub fn validate(input: &RegistrationInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if let Err(e) = validate_name(&input.name) {
        errors.insert(Field::Name, e);
    }
    if let Err(e) = validate_email(&input.email) {
        errors.insert(Field::Email, e);
    }
    if let Err(e) = validate_phone(&input.phone) {
        errors.insert(Field::Phone, e);
    }
    if let Err(e) = validate_gender(input.gender) {
        errors.insert(Field::Gender, e);
    }
    if let Err(e) = validate_city(&input.current_city) {
        errors.insert(Field::CurrentCity, e);
    }
    errors
}
