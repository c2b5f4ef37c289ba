// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy checks for staff credentials.
//!
//! The policy is advisory configuration owned by the security module of
//! the back office. Credential storage itself lives outside this
//! workspace, so the checks here cover composition and rotation only.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;

/// Why a proposed password was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// The password is shorter than the configured minimum.
    #[error("password must be at least {minimum} characters long")]
    TooShort {
        /// The configured minimum length.
        minimum: usize,
    },
    /// The policy requires an uppercase letter and none was present.
    #[error("password must contain at least one uppercase letter")]
    MissingUppercase,
    /// The policy requires a digit and none was present.
    #[error("password must contain at least one digit")]
    MissingDigit,
    /// The policy requires a symbol and none was present.
    #[error("password must contain at least one symbol")]
    MissingSymbol,
    /// The password contains an account field such as the name or email.
    #[error("password must not contain the account {field}")]
    ContainsAccountField {
        /// Which account field was found inside the password.
        field: &'static str,
    },
    /// The password and its confirmation differ.
    #[error("password and confirmation do not match")]
    ConfirmationMismatch,
}

/// Composition and rotation rules for staff passwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Minimum password length in bytes.
    pub min_length: usize,
    /// Whether at least one ASCII uppercase letter is required.
    pub require_uppercase: bool,
    /// Whether at least one ASCII digit is required.
    pub require_numbers: bool,
    /// Whether at least one ASCII symbol is required.
    pub require_symbols: bool,
    /// Days until a password must be rotated. Zero disables rotation.
    pub expiration_days: u16,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 10,
            require_uppercase: true,
            require_numbers: true,
            require_symbols: false,
            expiration_days: 90,
        }
    }
}

impl PasswordPolicy {
    /// Checks a proposed password against this policy.
    ///
    /// `email` and `display_name` belong to the account being changed;
    /// the password must not contain the email local part or any word of
    /// the display name.
    ///
    /// # Errors
    ///
    /// Returns the first [`PasswordPolicyError`] the password trips.
    pub fn validate(
        &self,
        password: &str,
        confirmation: &str,
        email: &str,
        display_name: &str,
    ) -> Result<(), PasswordPolicyError> {
        if password != confirmation {
            return Err(PasswordPolicyError::ConfirmationMismatch);
        }
        if password.len() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                minimum: self.min_length,
            });
        }
        if self.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PasswordPolicyError::MissingUppercase);
        }
        if self.require_numbers && !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }
        if self.require_symbols && !password.chars().any(|c| c.is_ascii_punctuation()) {
            return Err(PasswordPolicyError::MissingSymbol);
        }

        let lowered: String = password.to_lowercase();
        let local_part: &str = email.split('@').next().unwrap_or(email);
        if local_part.len() >= 3 && lowered.contains(&local_part.to_lowercase()) {
            return Err(PasswordPolicyError::ContainsAccountField { field: "email" });
        }
        for word in display_name.split_whitespace() {
            if word.len() >= 3 && lowered.contains(&word.to_lowercase()) {
                return Err(PasswordPolicyError::ContainsAccountField { field: "name" });
            }
        }
        Ok(())
    }

    /// Returns whether a password last changed on `last_changed` is due
    /// for rotation as of `today`.
    #[must_use]
    pub fn rotation_due(&self, last_changed: Date, today: Date) -> bool {
        if self.expiration_days == 0 {
            return false;
        }
        (today - last_changed).whole_days() >= i64::from(self.expiration_days)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_default_policy_accepts_strong_password() {
        let policy: PasswordPolicy = PasswordPolicy::default();
        let result = policy.validate(
            "Tr4velling-Kudu",
            "Tr4velling-Kudu",
            "alice.johnson@marketdesk.ao",
            "Alice Johnson",
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_rejects_mismatched_confirmation() {
        let policy: PasswordPolicy = PasswordPolicy::default();
        let result = policy.validate("Tr4velling-Kudu", "Tr4velling-Kud", "a@b.ao", "A B");
        assert_eq!(result, Err(PasswordPolicyError::ConfirmationMismatch));
    }

    #[test]
    fn test_rejects_short_password() {
        let policy: PasswordPolicy = PasswordPolicy::default();
        let result = policy.validate("Short9", "Short9", "a@b.ao", "A B");
        assert_eq!(result, Err(PasswordPolicyError::TooShort { minimum: 10 }));
    }

    #[test]
    fn test_rejects_missing_uppercase() {
        let policy: PasswordPolicy = PasswordPolicy::default();
        let result = policy.validate("tr4velling-kudu", "tr4velling-kudu", "a@b.ao", "A B");
        assert_eq!(result, Err(PasswordPolicyError::MissingUppercase));
    }

    #[test]
    fn test_rejects_missing_digit() {
        let policy: PasswordPolicy = PasswordPolicy::default();
        let result = policy.validate("Travelling-Kudu", "Travelling-Kudu", "a@b.ao", "A B");
        assert_eq!(result, Err(PasswordPolicyError::MissingDigit));
    }

    #[test]
    fn test_symbols_only_checked_when_required() {
        let relaxed: PasswordPolicy = PasswordPolicy::default();
        assert_eq!(
            relaxed.validate("Tr4vellingKudu", "Tr4vellingKudu", "a@b.ao", "A B"),
            Ok(())
        );

        let strict: PasswordPolicy = PasswordPolicy {
            require_symbols: true,
            ..PasswordPolicy::default()
        };
        assert_eq!(
            strict.validate("Tr4vellingKudu", "Tr4vellingKudu", "a@b.ao", "A B"),
            Err(PasswordPolicyError::MissingSymbol)
        );
        assert_eq!(
            strict.validate("Tr4velling-Kudu", "Tr4velling-Kudu", "a@b.ao", "A B"),
            Ok(())
        );
    }

    #[test]
    fn test_rejects_password_containing_email_local_part() {
        let policy: PasswordPolicy = PasswordPolicy::default();
        let result = policy.validate(
            "Bob.Williams77",
            "Bob.Williams77",
            "bob.williams@marketdesk.ao",
            "Bob Williams",
        );
        assert_eq!(
            result,
            Err(PasswordPolicyError::ContainsAccountField { field: "email" })
        );
    }

    #[test]
    fn test_rejects_password_containing_name_word() {
        let policy: PasswordPolicy = PasswordPolicy::default();
        let result = policy.validate(
            "JOHNSON-rules8",
            "JOHNSON-rules8",
            "alice@marketdesk.ao",
            "Alice Johnson",
        );
        assert_eq!(
            result,
            Err(PasswordPolicyError::ContainsAccountField { field: "name" })
        );
    }

    #[test]
    fn test_rotation_due_after_expiration_window() {
        let policy: PasswordPolicy = PasswordPolicy::default();
        assert!(!policy.rotation_due(date!(2026 - 01 - 01), date!(2026 - 03 - 31)));
        assert!(policy.rotation_due(date!(2026 - 01 - 01), date!(2026 - 04 - 01)));
    }

    #[test]
    fn test_rotation_never_due_when_disabled() {
        let policy: PasswordPolicy = PasswordPolicy {
            expiration_days: 0,
            ..PasswordPolicy::default()
        };
        assert!(!policy.rotation_due(date!(2020 - 01 - 01), date!(2026 - 01 - 01)));
    }
}
