//! Unified error type for the community portal.
//!
//! Every failure coming back from the remote store or the object bucket is
//! flattened into [`Error::Remote`]; callers never learn whether it was the
//! network, an authorization problem, or a constraint violation.

use thiserror::Error;

/// All errors the portal can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Any fault reported by the database or object storage.
    #[error("Remote service error: {message}")]
    Remote {
        /// Message from the underlying service
        message: String,
    },

    /// Unknown email, or an admin login with the wrong email/password pair.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The Discord user has no portal session.
    #[error("You are not signed in. Use `/login` or `/register` first.")]
    NotSignedIn,

    /// The command is reserved for the community admin.
    #[error("Only the community admin can do that.")]
    AdminOnly,

    /// Configuration could not be read or is inconsistent.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A required environment variable is missing or not unicode.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Local file system failure (local object store, config file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// User-facing failure text produced by a bot command.
    #[error("{message}")]
    Command {
        /// Message shown to the user
        message: String,
    },

    /// Error from the Discord framework.
    #[error("Discord framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),

    /// Error while building a reply string.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl From<sea_orm::DbErr> for Error {
    fn from(value: sea_orm::DbErr) -> Self {
        Self::Remote {
            message: value.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Remote {
            message: value.to_string(),
        }
    }
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
