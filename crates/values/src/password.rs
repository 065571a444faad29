//! Password value object with a pure strength policy.

use cadastro_core::{DomainError, DomainResult, ValueObject};

/// Minimum accepted password length, in characters.
pub const MIN_LENGTH: usize = 8;

/// Length at which the strength policy awards its length point.
const STRONG_LENGTH: usize = 12;

/// A validated password.
///
/// The secret is byte-faithful: never trimmed, case-folded or otherwise
/// normalized. `Debug` redacts the value, and there is no `Display` or serde
/// support; the only way to read the secret back is the explicit
/// [`Password::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl core::fmt::Debug for Password {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Outcome of the strength policy: a score and what is missing.
///
/// `reasons` are plain textual criteria with no formatting contract;
/// presentation belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    /// 0..=4, one point per satisfied criterion.
    pub score: u8,
    /// Unsatisfied criteria, in policy order.
    pub reasons: Vec<String>,
}

impl PasswordStrength {
    pub fn is_strong(&self) -> bool {
        self.score == 4
    }
}

impl Password {
    /// Accept a password as-is (no normalization).
    pub fn new(input: &str) -> DomainResult<Self> {
        Self::rebuild(input.to_owned())
    }

    /// Deliberately-named accessor for the secret.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Evaluate the strength policy.
    ///
    /// One point each for: length of at least 12, mixed upper/lower case,
    /// at least one digit, at least one symbol. A valid password can still
    /// score 0; validity only guarantees the minimum length.
    pub fn strength(&self) -> PasswordStrength {
        let mut score = 0u8;
        let mut reasons = Vec::new();

        if self.0.chars().count() >= STRONG_LENGTH {
            score += 1;
        } else {
            reasons.push(format!("use at least {STRONG_LENGTH} characters"));
        }

        let has_lower = self.0.chars().any(char::is_lowercase);
        let has_upper = self.0.chars().any(char::is_uppercase);
        if has_lower && has_upper {
            score += 1;
        } else {
            reasons.push("mix uppercase and lowercase letters".to_string());
        }

        if self.0.chars().any(|c| c.is_ascii_digit()) {
            score += 1;
        } else {
            reasons.push("add at least one digit".to_string());
        }

        if self.0.chars().any(|c| !c.is_alphanumeric()) {
            score += 1;
        } else {
            reasons.push("add at least one symbol".to_string());
        }

        PasswordStrength { score, reasons }
    }
}

impl ValueObject for Password {
    type Props = String;

    fn validate(value: &String) -> DomainResult<()> {
        if value.chars().count() < MIN_LENGTH {
            return Err(DomainError::validation_for(
                "password",
                format!("password must have at least {MIN_LENGTH} characters"),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_passwords() {
        assert!(Password::new("").is_err());
        assert!(Password::new("abc1234").is_err());

        let err = Password::new("1234567").unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn keeps_the_secret_byte_faithful() {
        let password = Password::new("  Senha Forte 1!  ").unwrap();
        assert_eq!(password.expose(), "  Senha Forte 1!  ");
    }

    #[test]
    fn debug_redacts_the_secret() {
        let password = Password::new("super-secret-1").unwrap();
        let rendered = format!("{password:?}");
        assert_eq!(rendered, "Password(<redacted>)");
        assert!(!rendered.contains("super"));
    }

    #[test]
    fn a_valid_password_can_still_score_zero() {
        let weak = Password::new("abcdefgh").unwrap();
        let strength = weak.strength();

        assert_eq!(strength.score, 0);
        // Every miss is reported, in policy order.
        assert_eq!(
            strength.reasons,
            vec![
                "use at least 12 characters".to_string(),
                "mix uppercase and lowercase letters".to_string(),
                "add at least one digit".to_string(),
                "add at least one symbol".to_string(),
            ]
        );
    }

    #[test]
    fn full_score_requires_every_criterion() {
        let strong = Password::new("Correto#Cavalo9Bateria").unwrap();
        let strength = strong.strength();

        assert_eq!(strength.score, 4);
        assert!(strength.is_strong());
        assert!(strength.reasons.is_empty());
    }

    #[test]
    fn each_missing_criterion_is_reported() {
        let password = Password::new("senhasecreta").unwrap();
        let strength = password.strength();

        assert_eq!(strength.score, 1, "only the length point");
        assert_eq!(
            strength.reasons,
            vec![
                "mix uppercase and lowercase letters".to_string(),
                "add at least one digit".to_string(),
                "add at least one symbol".to_string(),
            ]
        );
    }

    #[test]
    fn copy_with_goes_back_through_validation() {
        let password = Password::new("senha-forte-1").unwrap();

        let err = password.copy_with(|p| p.truncate(3)).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(password.expose(), "senha-forte-1");
    }
}
