//! Cache key type shared by status cache adapters.

use std::fmt;

use crate::domain::NationalNumber;

/// Namespace prefix for employee status entries.
pub const STATUS_CACHE_KEY_PREFIX: &str = "emp_status:";

/// Key under which a status snapshot is cached.
///
/// Keys are derived from the national number verbatim. An empty national
/// number yields the bare prefix; that is a valid key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusCacheKey(String);

impl StatusCacheKey {
    /// Build the key for a national number.
    ///
    /// # Examples
    /// ```
    /// use getemps::domain::NationalNumber;
    /// use getemps::domain::ports::StatusCacheKey;
    ///
    /// let key = StatusCacheKey::for_national_number(&NationalNumber::new("NAT1001"));
    /// assert_eq!(key.as_str(), "emp_status:NAT1001");
    /// ```
    #[must_use]
    pub fn for_national_number(national_number: &NationalNumber) -> Self {
        Self(format!("{STATUS_CACHE_KEY_PREFIX}{}", national_number.as_str()))
    }

    /// Borrow the underlying key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for StatusCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for StatusCacheKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
