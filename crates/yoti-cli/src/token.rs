//! # Token Subcommand
//!
//! Decrypts a one-time-use token with the application key.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::{json, Value};

use yoti_crypto::{decrypt_token, load_private_key_file};

/// Arguments for the token subcommand.
#[derive(Args, Debug)]
pub struct TokenArgs {
    /// PEM private key of the application.
    #[arg(long)]
    pub key: PathBuf,
    /// One-time-use token, URL-safe base64.
    #[arg(long)]
    pub token: String,
}

/// Run the token subcommand.
pub fn run(args: &TokenArgs) -> anyhow::Result<Value> {
    let key = load_private_key_file(&args.key)
        .with_context(|| format!("loading key {}", args.key.display()))?;
    let token = decrypt_token(&args.token, &key).context("decrypting token")?;
    Ok(json!({ "receipt_token": token }))
}
