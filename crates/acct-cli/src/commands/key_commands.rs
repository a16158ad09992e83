use clap::Subcommand;

#[derive(Subcommand)]
pub enum KeyCommands {
    /// Show whether an API key exists
    Status,

    /// Issue the first API key and print it once
    Generate,

    /// Replace the API key and print the new one once
    Regenerate {
        /// Type "regenerate my api key" to confirm
        #[arg(long)]
        confirm: String,
    },
}
