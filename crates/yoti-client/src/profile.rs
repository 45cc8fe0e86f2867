//! Profile endpoint.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET | `/profile/{token}?appId={sdk_id}` | Receipt for a completed share |

use yoti_crypto::{decrypt_token, public_key_der_base64};
use yoti_profile::{ActivityDetails, ProfileResponse, Receipt};

use crate::error::ClientError;
use crate::request::AUTH_KEY_HEADER;
use crate::YotiClient;

impl YotiClient {
    /// Fetch the raw receipt for a one-time-use token.
    pub async fn get_receipt(&self, encrypted_token: &str) -> Result<Receipt, ClientError> {
        let token = decrypt_token(encrypted_token, &self.config.key)?;
        let endpoint = format!("/profile/{token}");
        let label = "GET /profile/{token}";

        let request = self
            .request()
            .endpoint(&endpoint)
            .param("appId", self.config.sdk_id.as_str())
            .header(AUTH_KEY_HEADER, public_key_der_base64(&self.config.key)?)
            .build()?;

        let resp = request
            .into_request(&self.http)
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: label.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                endpoint: label.into(),
                status,
                body,
            });
        }

        let response: ProfileResponse = resp.json().await.map_err(|e| ClientError::Deserialization {
            endpoint: label.into(),
            source: e,
        })?;

        tracing::info!(
            receipt_id = response.receipt.receipt_id.as_deref().unwrap_or_default(),
            "fetched receipt"
        );
        Ok(response.receipt)
    }

    /// Fetch and decode the receipt for a one-time-use token.
    pub async fn get_activity_details(&self, encrypted_token: &str) -> Result<ActivityDetails, ClientError> {
        let receipt = self.get_receipt(encrypted_token).await?;
        Ok(ActivityDetails::from_receipt(&receipt, &self.config.key)?)
    }
}
