//! CNPJ: Brazilian legal-entity registry number.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use cadastro_core::{DomainError, DomainResult, ValueObject};

use crate::{all_identical, digits_only};

/// Weights for the first check digit, applied to digits 0..=11.
const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit, applied to digits 0..=12.
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// A validated CNPJ, stored as its 14 normalized digits.
///
/// Same mod-11 closure scheme as CPF, but with the registry's staggered
/// weight tables: digit 12 closes digits 0..=11 and digit 13 closes digits
/// 0..=12. All-identical sequences are rejected structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Parse a CNPJ from user input.
    ///
    /// Non-digit characters (dots, slash, hyphen, whitespace) are stripped
    /// before validation, so `"11.222.333/0001-81"` and `"11222333000181"`
    /// construct equal values.
    pub fn new(input: &str) -> DomainResult<Self> {
        Self::rebuild(digits_only(input))
    }

    /// The 14 normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical presentation: `NN.NNN.NNN/NNNN-NN`.
    pub fn format(&self) -> String {
        format!(
            "{}.{}.{}/{}-{}",
            &self.0[0..2],
            &self.0[2..5],
            &self.0[5..8],
            &self.0[8..12],
            &self.0[12..14]
        )
    }
}

/// Mod-11 check digit over `digits` under the given weight table.
///
/// A raw remainder below 2 maps to 0.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

impl ValueObject for Cnpj {
    type Props = String;

    fn validate(digits: &String) -> DomainResult<()> {
        if digits.len() != 14 {
            return Err(DomainError::validation_for(
                "cnpj",
                format!("CNPJ must have 14 digits, got {}", digits.len()),
            ));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation_for("cnpj", "CNPJ must contain only digits"));
        }
        if all_identical(digits) {
            return Err(DomainError::validation_for(
                "cnpj",
                "CNPJ with all identical digits is not valid",
            ));
        }

        let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
        if d[12] != check_digit(&d[..12], &FIRST_WEIGHTS) {
            return Err(DomainError::validation_for("cnpj", "CNPJ first check digit mismatch"));
        }
        if d[13] != check_digit(&d[..13], &SECOND_WEIGHTS) {
            return Err(DomainError::validation_for("cnpj", "CNPJ second check digit mismatch"));
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

impl core::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cnpj {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Cnpj> for String {
    fn from(value: Cnpj) -> Self {
        value.0
    }
}
