pub mod account_commands;
pub mod contact_commands;
pub mod key_commands;
pub mod password_commands;
pub mod payment_commands;
pub mod profile_commands;
pub mod session_commands;

pub use account_commands::AccountCommands;
pub use contact_commands::ContactCommands;
pub use key_commands::KeyCommands;
pub use password_commands::PasswordCommands;
pub use payment_commands::PaymentCommands;
pub use profile_commands::ProfileCommands;
pub use session_commands::SessionCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in, sign out, or inspect the stored session
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Profile details and picture
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Password operations
    Password {
        #[command(subcommand)]
        action: PasswordCommands,
    },

    /// Account lifecycle
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },

    /// API key operations
    Key {
        #[command(subcommand)]
        action: KeyCommands,
    },

    /// Token purchases
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },

    /// Contact forms (no sign-in required)
    Contact {
        #[command(subcommand)]
        action: ContactCommands,
    },
}
