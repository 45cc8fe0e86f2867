//! # yoti CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Yoti SDK CLI.
///
/// Decodes receipts, decrypts tokens, and fetches shared profiles.
#[derive(Parser, Debug)]
#[command(name = "yoti", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Decode a saved receipt offline.
    Receipt(yoti_cli::receipt::ReceiptArgs),
    /// Decrypt a one-time-use token.
    Token(yoti_cli::token::TokenArgs),
    /// Fetch and decode a profile from the API.
    Fetch(yoti_cli::fetch::FetchArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (output, complete) = match cli.command {
        Commands::Receipt(args) => yoti_cli::receipt::run(&args)?,
        Commands::Token(args) => (yoti_cli::token::run(&args)?, true),
        Commands::Fetch(args) => yoti_cli::fetch::run(&args).await?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    if !complete {
        anyhow::bail!("receipt decoded with errors");
    }
    Ok(())
}
