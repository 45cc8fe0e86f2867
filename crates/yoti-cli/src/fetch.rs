//! # Fetch Subcommand
//!
//! Exchanges a one-time-use token for a profile against the live API.
//! Configuration comes from the environment; see
//! [`ClientConfig::from_env`](yoti_client::ClientConfig::from_env).

use anyhow::Context;
use clap::Args;
use serde_json::Value;

use yoti_client::{ClientConfig, ClientError, YotiClient};

use crate::summary;

/// Arguments for the fetch subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// One-time-use token handed to the application after a share.
    #[arg(long)]
    pub token: String,
}

/// Run the fetch subcommand.
///
/// Returns the summary and whether every content stream decoded.
pub async fn run(args: &FetchArgs) -> anyhow::Result<(Value, bool)> {
    let config = ClientConfig::from_env().context("loading client configuration")?;
    tracing::debug!(?config, "client configuration");
    let client = YotiClient::new(config)?;

    match client.get_activity_details(&args.token).await {
        Ok(details) => Ok((summary::activity_details(&details), true)),
        Err(ClientError::Receipt(e)) => {
            tracing::warn!(error = %e, "receipt did not decode cleanly");
            Ok((summary::receipt_error(&e), false))
        }
        Err(e) => Err(e).context("fetching profile"),
    }
}
