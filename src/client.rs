use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid data provided.")]
    InvalidData,
    #[error("Invalid Ethereum address.")]
    InvalidAddress,
    #[error("Unexpected API response format.")]
    UnexpectedFormat,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// The line printed to the console when a fetch degrades to an empty result
    #[must_use]
    pub fn console_line(&self) -> String {
        match self {
            Self::InvalidData | Self::InvalidAddress | Self::UnexpectedFormat => {
                format!("Error: {self}")
            }
            Self::Transport(e) => format!("Error fetching transactions: {e}"),
            Self::Decode(e) => format!("Error fetching transactions: {e}"),
        }
    }
}

#[allow(clippy::module_name_repetitions)]
pub struct SafeTransactionClient {
    client: Client,
    base_url: String,
}

impl SafeTransactionClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn transactions_url(&self, safe_address: &str) -> String {
        format!(
            "{}/api/v1/safes/{}/multisig-transactions/",
            self.base_url, safe_address
        )
    }

    /// Fetch the multisig transactions of a Safe, keeping the failure reason
    ///
    /// # Errors
    /// Returns `InvalidData` on 400, `InvalidAddress` on 422, `Transport` on any
    /// other failed request, `Decode` on a non-JSON body and `UnexpectedFormat`
    /// when the body has no usable `results` field
    pub async fn try_fetch_transactions(
        &self,
        safe_address: &str,
    ) -> Result<Vec<Value>, FetchError> {
        let url = self.transactions_url(safe_address);
        debug!("Requesting {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        debug!("Safe Transaction Service responded with {}", status);

        match status {
            StatusCode::BAD_REQUEST => return Err(FetchError::InvalidData),
            StatusCode::UNPROCESSABLE_ENTITY => return Err(FetchError::InvalidAddress),
            _ => {}
        }

        let body = response.error_for_status()?.text().await?;
        let data: Value = serde_json::from_str(&body)?;

        extract_results(data)
    }

    /// Fetch the multisig transactions of a Safe, printing the failure and
    /// returning an empty list when anything goes wrong
    pub async fn fetch_transactions(&self, safe_address: &str) -> Vec<Value> {
        match self.try_fetch_transactions(safe_address).await {
            Ok(transactions) => transactions,
            Err(e) => {
                warn!("Fetching transactions for safe {} failed: {}", safe_address, e);
                println!("{}", e.console_line());
                Vec::new()
            }
        }
    }
}

fn extract_results(data: Value) -> Result<Vec<Value>, FetchError> {
    let Value::Object(mut map) = data else {
        return Err(FetchError::UnexpectedFormat);
    };

    match map.remove("results") {
        None => Err(FetchError::UnexpectedFormat),
        Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(results)) => Ok(results),
        Some(_) => Err(FetchError::UnexpectedFormat),
    }
}
