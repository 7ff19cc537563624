use anyhow::anyhow;
use async_trait::async_trait;
use gloo::net::http::Request;
use shared::FeeCreationPayload;

use crate::hooks::use_fee_form::FeeSubmitHandler;
use crate::services::settings::AppSettings;

/// API client for communicating with the fee backend
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::with_base_url(settings.api_base_url.clone())
    }

    pub fn fees_url(&self) -> String {
        format!("{}/api/fees", self.base_url)
    }

    /// Create a fee
    pub async fn create_fee(&self, request: &FeeCreationPayload) -> Result<(), String> {
        let url = self.fees_url();

        match Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(format!("Server error {}: {}", status, error_text))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

#[async_trait(?Send)]
impl FeeSubmitHandler for ApiClient {
    async fn submit_fee(&self, payload: FeeCreationPayload) -> anyhow::Result<()> {
        self.create_fee(&payload).await.map_err(|e| anyhow!(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fees_url() {
        let client = ApiClient::with_base_url("https://admin.example.com".to_string());
        assert_eq!(client.fees_url(), "https://admin.example.com/api/fees");

        let client = ApiClient::from_settings(&AppSettings::default());
        assert_eq!(client.fees_url(), "http://localhost:8080/api/fees");
    }
}
