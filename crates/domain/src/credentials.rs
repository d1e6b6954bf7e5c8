//! Tapo cloud account credentials used to authenticate device sessions.

use std::fmt;

/// Account email and password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Combine optional parts, treating missing or empty values as unset.
    #[must_use]
    pub fn from_parts(email: Option<String>, password: Option<String>) -> Option<Self> {
        let email = email.filter(|v| !v.is_empty())?;
        let password = password.filter(|v| !v.is_empty())?;
        Some(Self { email, password })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
