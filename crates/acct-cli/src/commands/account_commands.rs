use clap::Subcommand;

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Permanently delete the account
    Delete {
        /// Type "delete my account" to confirm
        #[arg(long)]
        confirm: String,
    },
}
