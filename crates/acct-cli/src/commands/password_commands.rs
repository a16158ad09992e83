use clap::Subcommand;

#[derive(Subcommand)]
pub enum PasswordCommands {
    /// Change the password
    Change {
        /// Current password
        #[arg(long, env = "ACCT_CURRENT_PASSWORD", hide_env_values = true)]
        current: String,

        /// New password
        #[arg(long, env = "ACCT_NEW_PASSWORD", hide_env_values = true)]
        new: String,
    },

    /// Check the password without changing it
    Verify {
        /// Password to check
        #[arg(long, env = "ACCT_PASSWORD", hide_env_values = true)]
        password: String,
    },
}
