use std::fmt;

use serde::Serialize;

/// Gender selection offered by the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
}

static ALL_GENDERS: &[Gender] = &[Gender::Male, Gender::Female];

impl Gender {
    /// Returns the wire string sent to the server.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Returns all selectable genders in display order.
    pub fn all() -> &'static [Gender] {
        ALL_GENDERS
    }
}

#[mutants::skip]
impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One registration in progress.
///
/// Created empty when the form opens, mutated field-by-field as the user
/// types, and discarded after a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `None` until the user picks an option.
    pub gender: Option<Gender>,
    pub current_city: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_wire_strings() {
        assert_eq!(Gender::Male.as_str(), "Male");
        assert_eq!(Gender::Female.as_str(), "Female");
    }

    #[test]
    fn gender_all_in_display_order() {
        assert_eq!(Gender::all(), &[Gender::Male, Gender::Female]);
    }

    #[test]
    fn input_starts_empty() {
        let input = RegistrationInput::default();
        assert_eq!(input.name, "");
        assert_eq!(input.email, "");
        assert_eq!(input.phone, "");
        assert_eq!(input.gender, None);
        assert_eq!(input.current_city, "");
    }
}
