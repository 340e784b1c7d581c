use clap::Parser;

pub const DEFAULT_SAFE_ADDRESS: &str = "0xBbA4C8eB57DF16c4CfAbe4e9A3Ab697A3e0C65D8";
pub const DEFAULT_API_URL: &str = "https://safe-transaction-mainnet.safe.global";

#[derive(Parser, Clone, Debug)]
#[command(
    version,
    about = "Fetch and count WalletConnect transactions for a given Safe"
)]
pub struct CounterOptions {
    /// Safe address to fetch transactions for.
    #[arg(long = "safe_address", default_value = DEFAULT_SAFE_ADDRESS)]
    pub safe_address: String,

    /// Base URL of the Safe Transaction Service
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Exit with an error instead of reporting 0 when the fetch fails
    #[arg(long)]
    pub strict: bool,
}
