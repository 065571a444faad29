//! CEP: Brazilian postal code.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use cadastro_core::{DomainError, DomainResult, ValueObject};

use crate::digits_only;

/// A validated CEP, stored as its 8 normalized digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cep(String);

impl Cep {
    /// Parse a CEP from user input.
    ///
    /// Non-digit characters (hyphen, whitespace) are stripped before
    /// validation, so `"01310-100"` and `"01310100"` construct equal values.
    pub fn new(input: &str) -> DomainResult<Self> {
        Self::rebuild(digits_only(input))
    }

    /// The 8 normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical presentation: `NNNNN-NNN`.
    pub fn format(&self) -> String {
        format!("{}-{}", &self.0[0..5], &self.0[5..8])
    }
}

impl ValueObject for Cep {
    type Props = String;

    fn validate(digits: &String) -> DomainResult<()> {
        if digits.len() != 8 {
            return Err(DomainError::validation_for(
                "cep",
                format!("CEP must have 8 digits, got {}", digits.len()),
            ));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation_for("cep", "CEP must contain only digits"));
        }
        Ok(())
    }

    fn rebuild(props: String) -> DomainResult<Self> {
        Self::validate(&props)?;
        Ok(Self(props))
    }

    fn props(&self) -> &String {
        &self.0
    }
}

impl core::fmt::Display for Cep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cep {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Cep {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Cep> for String {
    fn from(value: Cep) -> Self {
        value.0
    }
}
