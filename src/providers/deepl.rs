use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::Translator;

/// DeepL API client
///
/// Works against both the free and pro endpoints; the plan is encoded in the
/// configured base URL (api-free.deepl.com vs api.deepl.com).
#[derive(Debug)]
pub struct DeepL {
    /// HTTP client for API requests
    client: Client,
    /// DeepL auth key
    api_key: String,
    /// API base URL
    endpoint: String,
}

/// DeepL translation request
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    /// Texts to translate; we always send exactly one
    text: Vec<&'a str>,
    /// Source language, uppercase per the API convention
    source_lang: String,
    /// Target language, uppercase per the API convention
    target_lang: String,
}

/// DeepL translation response
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    /// One entry per input text
    translations: Vec<Translation>,
}

/// A single translated text in a DeepL response
#[derive(Debug, Deserialize)]
struct Translation {
    /// The translated text
    text: String,
}

impl DeepL {
    /// Create a new DeepL client
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/v2/{}", self.endpoint.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl Translator for DeepL {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        let request = TranslateRequest {
            text: vec![text],
            source_lang: source.to_uppercase(),
            target_lang: target.to_uppercase(),
        };

        let response = self
            .client
            .post(self.api_url("translate"))
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());

            return Err(match status.as_u16() {
                429 | 456 => ProviderError::RateLimitExceeded(message),
                401 | 403 => ProviderError::AuthenticationError(message),
                code => ProviderError::ApiError {
                    status_code: code,
                    message,
                },
            });
        }

        let body = response
            .json::<TranslateResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        body.translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| ProviderError::ParseError("Empty translations array".to_string()))
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        // The usage endpoint is the cheapest authenticated call
        let response = self
            .client
            .get(self.api_url("usage"))
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(ProviderError::AuthenticationError(
                    "DeepL rejected the auth key".to_string(),
                ));
            }
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: "Usage endpoint returned an error".to_string(),
            });
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "deepl"
    }
}
