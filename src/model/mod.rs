mod registration;
mod validation;

pub use registration::{Gender, RegistrationInput};
pub use validation::{
    Field, ValidationError, ValidationErrors, validate, validate_city, validate_email,
    validate_gender, validate_name, validate_phone,
};
