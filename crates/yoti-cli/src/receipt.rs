//! # Receipt Subcommand
//!
//! Decodes a receipt saved from `GET /profile/{token}`, without network
//! access. The file may hold the full response (`{"receipt": {...}}`) or
//! the bare receipt object.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::Value;

use yoti_crypto::load_private_key_file;
use yoti_profile::{ActivityDetails, ProfileResponse, Receipt};

use crate::summary;

/// Arguments for the receipt subcommand.
#[derive(Args, Debug)]
pub struct ReceiptArgs {
    /// PEM private key of the application.
    #[arg(long)]
    pub key: PathBuf,
    /// Receipt JSON file.
    #[arg(long)]
    pub file: PathBuf,
}

/// Parse receipt JSON, with or without the `receipt` wrapper.
pub fn parse_receipt(json: &str) -> anyhow::Result<Receipt> {
    if let Ok(response) = serde_json::from_str::<ProfileResponse>(json) {
        return Ok(response.receipt);
    }
    serde_json::from_str(json).context("parsing receipt JSON")
}

/// Run the receipt subcommand.
///
/// Returns the summary and whether every content stream decoded.
pub fn run(args: &ReceiptArgs) -> anyhow::Result<(Value, bool)> {
    let key = load_private_key_file(&args.key)
        .with_context(|| format!("loading key {}", args.key.display()))?;
    let json = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let receipt = parse_receipt(&json)?;

    Ok(match ActivityDetails::from_receipt(&receipt, &key) {
        Ok(details) => (summary::activity_details(&details), true),
        Err(e) => {
            tracing::warn!(error = %e, "receipt did not decode cleanly");
            (summary::receipt_error(&e), false)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    use yoti_core::proto::AttributeList;
    use yoti_core::{ContentType, RawAttribute};
    use yoti_crypto::encoding::encode_standard;
    use yoti_crypto::testing::{encrypt_envelope, test_key, wrap_key, TEST_KEY_PEM};

    const AES_KEY: [u8; 16] = *b"sixteen byte key";

    fn sealed_receipt(user_profile_content: String) -> serde_json::Value {
        serde_json::json!({
            "receipt": {
                "receipt_id": "receipt-id-1",
                "wrapped_receipt_key": wrap_key(&AES_KEY, &test_key()),
                "other_party_profile_content": user_profile_content,
                "remember_me_id": "remember-me",
                "sharing_outcome": "SUCCESS",
                "timestamp": "2016-07-19T08:55:38Z"
            }
        })
    }

    fn run_with(receipt: &serde_json::Value) -> (Value, bool) {
        let dir = tempfile::tempdir().unwrap();
        let key = dir.path().join("key.pem");
        let file = dir.path().join("receipt.json");
        std::fs::write(&key, TEST_KEY_PEM).unwrap();
        std::fs::write(&file, receipt.to_string()).unwrap();
        run(&ReceiptArgs { key, file }).unwrap()
    }

    #[test]
    fn run_decodes_sealed_receipt() {
        let attributes = AttributeList {
            attributes: vec![RawAttribute {
                name: "given_names".into(),
                value: b"Jenny".to_vec(),
                content_type: ContentType::String as i32,
                anchors: vec![],
                ephemeral_id: "eph-1".into(),
            }],
        };
        let content = encode_standard(&encrypt_envelope(&AES_KEY, &attributes.encode_to_vec()));

        let (summary, complete) = run_with(&sealed_receipt(content));
        assert!(complete);
        assert_eq!(summary["receipt_id"], "receipt-id-1");
        assert_eq!(summary["remember_me_id"], "remember-me");
        assert_eq!(summary["user_profile"][0]["name"], "given_names");
        assert_eq!(summary["user_profile"][0]["value"], "Jenny");
    }

    #[test]
    fn run_reports_failed_stream() {
        let (summary, complete) = run_with(&sealed_receipt("not*base64".into()));
        assert!(!complete);
        assert_eq!(summary["errors"][0]["stream"], "other_party_profile_content");
        assert_eq!(summary["receipt_id"], "receipt-id-1");
    }

    #[test]
    fn run_fails_on_missing_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = ReceiptArgs {
            key: dir.path().join("missing.pem"),
            file: dir.path().join("receipt.json"),
        };
        assert!(run(&args).is_err());
    }

    #[test]
    fn parse_receipt_accepts_wrapped_and_bare() {
        let wrapped = parse_receipt(r#"{"receipt":{"receipt_id":"a"}}"#).unwrap();
        assert_eq!(wrapped.receipt_id.as_deref(), Some("a"));

        let bare = parse_receipt(r#"{"receipt_id":"b","sharing_outcome":"SUCCESS"}"#).unwrap();
        assert_eq!(bare.receipt_id.as_deref(), Some("b"));
    }

    #[test]
    fn parse_receipt_rejects_non_json() {
        assert!(parse_receipt("receipt").is_err());
    }
}
