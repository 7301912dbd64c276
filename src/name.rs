//! A validated, non-empty name used by both categories and medications.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated, non-empty, trimmed name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyName] if `name` is empty
    /// after trimming.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a name without validation.
    ///
    /// The caller should ensure that the string is not empty, e.g. because it
    /// was read back from the database which only ever receives validated names.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::new(s)
    }
}

impl TryFrom<String> for Name {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Name::new(&value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod name_tests {
    use crate::{Error, name::Name};

    #[test]
    fn new_fails_on_empty_string() {
        assert_eq!(Name::new(""), Err(Error::EmptyName));
    }

    #[test]
    fn new_fails_on_just_whitespace() {
        assert_eq!(Name::new("\n\t \r"), Err(Error::EmptyName));
    }

    #[test]
    fn new_trims_surrounding_whitespace() {
        let name = Name::new("  Paracetamol 500mg ").unwrap();

        assert_eq!(name.as_ref(), "Paracetamol 500mg");
    }

    #[test]
    fn deserialize_rejects_blank_name() {
        let result = serde_json::from_str::<Name>("\"   \"");

        assert!(result.is_err());
    }
}
