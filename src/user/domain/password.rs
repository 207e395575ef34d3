//! Plain-text passwords and their Argon2id hashes.

use super::UserDomainError;
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash as PhcHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use std::fmt;

const MIN_PASSWORD_LENGTH: usize = 6;

/// Candidate password that satisfies the length policy.
///
/// The value is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a password that passes the minimum-length policy.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::PasswordTooShort`] below six characters.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        if raw.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserDomainError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        Ok(Self(raw))
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Argon2id hash of a password in PHC string form
/// (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`).
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hashes `password` with Argon2id under a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::PasswordHashing`] when the hasher fails.
    pub fn derive(password: &Password) -> Result<Self, UserDomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = Argon2::default()
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|err| UserDomainError::PasswordHashing(err.to_string()))?;
        Ok(Self(phc.to_string()))
    }

    /// Accepts a stored PHC string.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::MalformedPasswordHash`] when `stored` is not
    /// a valid PHC string.
    pub fn parse(stored: &str) -> Result<Self, UserDomainError> {
        PhcHash::new(stored).map_err(|_| UserDomainError::MalformedPasswordHash)?;
        Ok(Self(stored.to_owned()))
    }

    /// Returns the PHC string for storage.
    #[must_use]
    pub fn to_storage(&self) -> String {
        self.0.clone()
    }

    /// Checks a candidate password against this hash.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        PhcHash::new(&self.0).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(candidate.as_bytes(), &parsed)
                .is_ok()
        })
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(***)")
    }
}
