use std::env;
use std::time::Duration;

use crate::error::{ErrorBackend, Result};
use qg_core::error::ErrorCore;
use qg_core::server::default_config::{
    DEFAULT_PROVIDER_BASE_URL, DEFAULT_PROVIDER_MODEL, DEFAULT_PROVIDER_TIMEOUT_SECS,
};
use qg_core::server::payload::provider::generate_content_request::GenerateContentRequest;
use qg_core::server::payload::provider::generate_content_response::GenerateContentResponse;
use reqwest::{Client, Response};

/// Client for the generative-AI provider. Configuration is read once at
/// construction and is read-only afterwards.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl ProviderClient {
    pub fn new(api_key: String) -> Result<Self> {
        let base_url =
            env::var("PROVIDER_BASE_URL").unwrap_or(String::from(DEFAULT_PROVIDER_BASE_URL));
        let model = env::var("PROVIDER_MODEL").unwrap_or(String::from(DEFAULT_PROVIDER_MODEL));
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS))
            .build()?;

        Ok(ProviderClient {
            client,
            base_url,
            model,
            api_key,
        })
    }

    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<String> {
        let res = match res {
            Ok(res) => res,
            Err(e) if e.is_connect() || e.is_timeout() => {
                return Err(ErrorBackend::UpstreamUnavailable(self.base_url.clone()));
            }
            Err(e) => return Err(ErrorBackend::Http(e)),
        };
        match res.error_for_status() {
            Ok(res) => {
                let text = res.text().await?;
                Ok(text)
            }
            Err(e) => match e.status() {
                Some(status) => Err(ErrorBackend::UpstreamUnavailable(format!(
                    "provider replied with status {status}"
                ))),
                None => Err(ErrorBackend::Http(e)),
            },
        }
    }

    /// Sends one prompt to the provider and returns the generated text. One
    /// outbound call, no retries; retry policy belongs to the caller's
    /// transport if it wants one.
    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let payload = GenerateContentRequest::from_prompt(prompt);
        let result = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await;
        let body = self.handle_response(result).await?;

        let response = serde_json::from_str::<GenerateContentResponse>(&body).map_err(|e| {
            ErrorBackend::Core(ErrorCore::MalformedResponse(format!(
                "provider response is not valid JSON: {e}"
            )))
        })?;
        response.into_text().ok_or_else(|| {
            ErrorBackend::Core(ErrorCore::MalformedResponse(
                "provider response contains no generated text".to_string(),
            ))
        })
    }
}
