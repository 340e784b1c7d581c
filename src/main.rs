use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use safe_walletconnect::{Counter, CounterOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let opts = CounterOptions::parse();

    tracing::debug!("Safe address: {}", opts.safe_address);
    tracing::debug!("API URL: {}", opts.api_url);
    tracing::debug!("Strict: {}", opts.strict);

    let counter = Counter::new(opts);
    counter.run().await?;

    Ok(())
}
