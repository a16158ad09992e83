use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "acct")]
#[command(about = "Account dashboard CLI: profile, API key, payments and contact")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (overrides api.base_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Bearer token to use instead of the stored session
    #[arg(long, global = true, env = "ACCT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
