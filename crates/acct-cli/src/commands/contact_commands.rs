use clap::Subcommand;

#[derive(Subcommand)]
pub enum ContactCommands {
    /// Send the general contact form
    Send {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        message: String,
    },

    /// Send the developer/enterprise contact form
    Developer {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        company: Option<String>,

        /// What the API will be used for
        #[arg(long)]
        use_case: Option<String>,

        #[arg(long)]
        message: String,
    },
}
