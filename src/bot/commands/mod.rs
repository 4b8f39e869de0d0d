//! Discord command implementations organized by portal screen.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Register, login, logout and profile
pub mod account;

/// Fund balances and admin fund edits
pub mod funds;

/// Photo and video gallery
pub mod gallery;

/// General utility commands
pub mod general;

/// Admin member management
pub mod members;

use crate::{bot::BotData, errors::Error};
use tracing::error;

// Export commands
pub use account::*;
pub use funds::*;
pub use gallery::*;
pub use general::*;
pub use members::*;

/// Every command the bot registers.
#[must_use]
pub fn all() -> Vec<poise::Command<BotData, Error>> {
    vec![
        ping(),
        help(),
        register(),
        login(),
        logout(),
        profile(),
        funds(),
        set_fund(),
        gallery(),
        upload(),
        members(),
        remove_member(),
    ]
}

/// Logs a data-access failure and replaces it with the uniform message shown
/// to the user.
pub(crate) fn failed(action: &'static str) -> impl FnOnce(Error) -> Error {
    move |e| {
        error!("Failed to {action}: {e}");
        Error::Command {
            message: format!("❌ Failed to {action}. Please try again later."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_hides_remote_detail() {
        let err = failed("load fund balances")(Error::Remote {
            message: "password authentication failed for user postgres".to_string(),
        });
        let shown = err.to_string();
        assert_eq!(shown, "❌ Failed to load fund balances. Please try again later.");
        assert!(!shown.contains("postgres"));
    }

    #[test]
    fn test_all_commands_have_unique_names() {
        let commands = all();
        let mut names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
