// src/domain/session/value_objects.rs
use std::fmt;

/// Opaque refresh credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RefreshTokenValue(String);

impl RefreshTokenValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RefreshTokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshTokenValue(<redacted>)")
    }
}

impl From<RefreshTokenValue> for String {
    fn from(value: RefreshTokenValue) -> Self {
        value.0
    }
}
