use clap::Subcommand;

#[derive(Subcommand)]
pub enum PaymentCommands {
    /// Create a payment order for a token package
    CreateOrder {
        /// Amount in the currency's smallest unit (cents, paise)
        #[arg(long)]
        amount: u64,

        /// ISO currency code
        #[arg(long, default_value = "USD")]
        currency: String,

        /// Tokens purchased by this order
        #[arg(long)]
        tokens: Option<u64>,
    },

    /// List past payments
    History {
        /// Print the server response unmodified
        #[arg(long)]
        raw: bool,
    },
}
