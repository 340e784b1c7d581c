pub mod client;
pub mod counting;
pub mod options;

pub use client::{FetchError, SafeTransactionClient};
pub use counting::{count_walletconnect_transactions, WALLETCONNECT_ORIGIN};
pub use options::CounterOptions;

use anyhow::{Context, Result};
use tracing::info;

pub struct Counter {
    options: CounterOptions,
}

impl Counter {
    pub fn new(options: CounterOptions) -> Self {
        Self { options }
    }

    /// Fetch the Safe's transactions and print how many came from WalletConnect
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built, or in strict mode
    /// if the transactions cannot be fetched
    pub async fn run(&self) -> Result<usize> {
        let count = self.count().await?;
        println!("{}", Self::report_line(&self.options.safe_address, count));
        Ok(count)
    }

    /// # Errors
    /// Same as [`Counter::run`]
    pub async fn count(&self) -> Result<usize> {
        let client = SafeTransactionClient::new(&self.options.api_url)?;
        let safe_address = &self.options.safe_address;

        let transactions = if self.options.strict {
            client
                .try_fetch_transactions(safe_address)
                .await
                .with_context(|| format!("Failed to fetch transactions for safe {safe_address}"))?
        } else {
            client.fetch_transactions(safe_address).await
        };

        let count = count_walletconnect_transactions(&transactions);
        info!(
            "Safe {} has {} WalletConnect transactions out of {}",
            safe_address,
            count,
            transactions.len()
        );

        Ok(count)
    }

    #[must_use]
    pub fn report_line(safe_address: &str, count: usize) -> String {
        format!("Number of WalletConnect transactions for safe {safe_address}: {count}")
    }
}
