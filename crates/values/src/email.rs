//! E-mail address value object.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use cadastro_core::{DomainError, DomainResult, ValueObject};

/// A validated e-mail address, stored lower-cased and trimmed.
///
/// Validation is structural, not a deliverability check: exactly one `@`,
/// a non-empty local part, no whitespace anywhere, and a domain with an
/// interior dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse an e-mail address from user input.
    ///
    /// The input is trimmed and lower-cased before validation, so
    /// `" USER@Example.COM "` and `"user@example.com"` construct equal
    /// values.
    pub fn new(input: &str) -> DomainResult<Self> {
        Self::rebuild(input.trim().to_lowercase())
    }

    /// The normalized address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the `@`.
    pub fn local(&self) -> &str {
        self.split().0
    }

    /// The part after the `@`.
    pub fn domain(&self) -> &str {
        self.split().1
    }

    /// Privacy mask for display: `u**r@example.com`.
    ///
    /// The first and last character of the local part are revealed only when
    /// it is longer than two characters; shorter local parts are fully
    /// masked. The domain is never masked.
    pub fn mask(&self) -> String {
        let (local, domain) = self.split();
        let chars: Vec<char> = local.chars().collect();
        let masked = if chars.len() > 2 {
            format!(
                "{}{}{}",
                chars[0],
                "*".repeat(chars.len() - 2),
                chars[chars.len() - 1]
            )
        } else {
            "*".repeat(chars.len())
        };
        format!("{masked}@{domain}")
    }

    fn split(&self) -> (&str, &str) {
        self.0
            .split_once('@')
            .expect("validated email always contains '@'")
    }
}

impl ValueObject for Email {
    type Props = String;

    fn validate(value: &String) -> DomainResult<()> {
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::validation_for(
                "email",
                "email cannot contain whitespace",
            ));
        }
        if value.chars().any(char::is_uppercase) {
            return Err(DomainError::validation_for(
                "email",
                "email must be lower-cased",
            ));
        }
        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::validation_for("email", "email must contain '@'"));
        };
        if local.is_empty() {
            return Err(DomainError::validation_for(
                "email",
                "email local part cannot be empty",
            ));
        }
        if domain.contains('@') {
            return Err(DomainError::validation_for(
                "email",
                "email must contain a single '@'",
            ));
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(DomainError::validation_for(
                "email",
                "email domain must contain an interior dot",
            ));
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

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}
