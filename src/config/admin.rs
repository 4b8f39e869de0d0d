//! Admin credential configuration loaded from environment variables.
//!
//! The admin login pair is read from `ADMIN_EMAIL` and `ADMIN_PASSWORD` in the
//! `.env` file or the process environment. When either is missing no admin login
//! can succeed.

use tracing::warn;

/// The configured admin email/password pair.
#[derive(Clone, Default)]
pub struct AdminCredentials {
    email: Option<String>,
    password: Option<String>,
}

impl AdminCredentials {
    /// Builds credentials from explicit values.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// Reads `ADMIN_EMAIL` and `ADMIN_PASSWORD` from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let credentials = Self {
            email: non_empty_var("ADMIN_EMAIL"),
            password: non_empty_var("ADMIN_PASSWORD"),
        };
        if !credentials.is_configured() {
            warn!("ADMIN_EMAIL or ADMIN_PASSWORD not set; admin login is disabled.");
        }
        credentials
    }

    /// Whether both halves of the pair are present.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.email.is_some() && self.password.is_some()
    }

    /// Exact match against the configured pair. Always false when unconfigured.
    #[must_use]
    pub fn matches(&self, email: &str, password: &str) -> bool {
        match (&self.email, &self.password) {
            (Some(e), Some(p)) => e == email && p == password,
            _ => false,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}
