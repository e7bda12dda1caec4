//! Validated email address, used for the admin identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// RFC 5321 upper bound on address length.
const MAX_LEN: usize = 254;

/// Why a string failed to parse as an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email longer than 254 characters")]
    TooLong,
    #[error("email must contain an @ symbol")]
    NoAtSign,
    #[error("email has nothing before the @")]
    LocalMissing,
    #[error("email has nothing after the @")]
    DomainMissing,
}

/// An email address that passed structural checks: non-empty local part,
/// `@`, non-empty domain, within the RFC 5321 length bound. No attempt is
/// made to validate beyond that; the mail ecosystem is the real arbiter.
///
/// ```
/// use parasol_core::Email;
///
/// let email = Email::parse("shopkeeper@parasol.test")?;
/// assert!(email.matches_ignore_case("SHOPKEEPER@parasol.test"));
/// # Ok::<(), parasol_core::EmailError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse a string into an `Email`, keeping the original spelling.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] naming the first structural check the
    /// input failed.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > MAX_LEN {
            return Err(EmailError::TooLong);
        }
        let (local, domain) = s.split_once('@').ok_or(EmailError::NoAtSign)?;
        if local.is_empty() {
            return Err(EmailError::LocalMissing);
        }
        if domain.is_empty() {
            return Err(EmailError::DomainMissing);
        }
        Ok(Self(s.to_owned()))
    }

    /// The address as it was parsed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-insensitive comparison against a candidate string.
    ///
    /// Domains are case-insensitive per RFC; treating the local part the
    /// same matches how the rest of the world handles login emails.
    #[must_use]
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
