//! Employee identity as read from the employee store.
//!
//! The status pipeline never mutates employees; adapters construct them from
//! storage rows and hand them to the resolver read-only.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Internal numeric employee identifier (owner key for salary records).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap a raw storage identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// External, stable identifier used for lookups and cache keys.
///
/// No syntax rules are enforced here: an empty national number is a valid
/// (if degenerate) lookup key. Request-shape validation belongs to inbound
/// adapters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NationalNumber(String);

/// Hex characters kept from the SHA-256 digest when fingerprinting.
const FINGERPRINT_LEN: usize = 12;

impl NationalNumber {
    /// Wrap an identifier verbatim.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Short, non-reversible digest suitable for structured logs.
    ///
    /// # Examples
    /// ```
    /// use getemps::domain::NationalNumber;
    ///
    /// let fingerprint = NationalNumber::new("NAT1001").fingerprint();
    /// assert_eq!(fingerprint.len(), 12);
    /// assert!(!fingerprint.contains("NAT1001"));
    /// ```
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        let mut encoded = hex::encode(digest);
        encoded.truncate(FINGERPRINT_LEN);
        encoded
    }
}

impl AsRef<str> for NationalNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for NationalNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NationalNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Employee record resolved from a national number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Internal owner key.
    pub id: EmployeeId,
    /// Display name.
    pub username: String,
    /// External identifier.
    pub national_number: NationalNumber,
    /// Contact e-mail address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Whether the employee is currently active.
    pub is_active: bool,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}
