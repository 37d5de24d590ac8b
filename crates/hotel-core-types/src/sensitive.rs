//! Sensitive data marker for automatic redaction
//!
//! Guest contact details (phone numbers) pass through log statements at
//! operation boundaries. Wrapping them in `Sensitive<T>` keeps the raw
//! value out of `Debug` and `Display` output.

use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use hotel_core_types::Sensitive;
///
/// let phone = Sensitive::new("1234567890");
/// assert_eq!(format!("{:?}", phone), "***REDACTED***");
/// assert_eq!(format!("{}", phone), "***REDACTED***");
///
/// assert_eq!(phone.expose(), &"1234567890");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
