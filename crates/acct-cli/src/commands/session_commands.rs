use clap::Subcommand;

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Store a bearer token for later commands
    Login {
        /// Bearer token issued by the sign-in page
        #[arg(long)]
        token: String,
    },

    /// Forget the stored token
    Logout,

    /// Show whether a token is stored
    Status,
}
