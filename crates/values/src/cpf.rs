//! CPF: Brazilian natural-person registry number.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use cadastro_core::{DomainError, DomainResult, ValueObject};

use crate::{all_identical, digits_only};

/// A validated CPF, stored as its 11 normalized digits.
///
/// Validation implements the Receita Federal mod-11 check-digit arithmetic:
/// digit 9 closes digits 0..=8 under weights 10 down to 2, digit 10 closes
/// digits 0..=9 under weights 11 down to 2. Sequences of a single repeated
/// digit are rejected outright even when the arithmetic happens to hold
/// (e.g. `00000000000`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Parse a CPF from user input.
    ///
    /// Non-digit characters (dots, hyphen, whitespace) are stripped before
    /// validation, so `"529.982.247-25"` and `"52998224725"` construct equal
    /// values.
    pub fn new(input: &str) -> DomainResult<Self> {
        Self::rebuild(digits_only(input))
    }

    /// The 11 normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical presentation: `NNN.NNN.NNN-NN`.
    pub fn format(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.0[0..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..11]
        )
    }
}

/// Mod-11 check digit over `digits`, weights descending from `first_weight`.
///
/// A raw remainder below 2 maps to 0.
fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (first_weight - i as u32))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

impl ValueObject for Cpf {
    type Props = String;

    fn validate(digits: &String) -> DomainResult<()> {
        if digits.len() != 11 {
            return Err(DomainError::validation_for(
                "cpf",
                format!("CPF must have 11 digits, got {}", digits.len()),
            ));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation_for("cpf", "CPF must contain only digits"));
        }
        if all_identical(digits) {
            return Err(DomainError::validation_for(
                "cpf",
                "CPF with all identical digits is not valid",
            ));
        }

        let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
        if d[9] != check_digit(&d[..9], 10) {
            return Err(DomainError::validation_for("cpf", "CPF first check digit mismatch"));
        }
        if d[10] != check_digit(&d[..10], 11) {
            return Err(DomainError::validation_for("cpf", "CPF second check digit mismatch"));
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

impl core::fmt::Display for Cpf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cpf {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.0
    }
}
