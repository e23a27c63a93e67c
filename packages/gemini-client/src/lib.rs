//! Pure Gemini REST API client
//!
//! A clean, minimal client for the Gemini `generateContent` API with no
//! domain-specific logic. Supports multimodal requests (text plus inline
//! binary payloads such as PDFs or images), schema-constrained JSON output,
//! and image-bearing responses.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GenerateContentRequest, Part};
//!
//! let client = GeminiClient::from_env()?;
//!
//! // Plain text generation
//! let response = client
//!     .generate_content("gemini-2.5-flash", GenerateContentRequest::from_text("Hello!"))
//!     .await?;
//! println!("{}", response.text().unwrap_or_default());
//! ```
//!
//! # Type-Safe Structured Output
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Invoice {
//!     total: f64,
//!     vendor: String,
//! }
//!
//! // Schema generated automatically from the type!
//! let invoice: Invoice = client
//!     .extract("gemini-2.5-flash", vec![
//!         Part::inline_data("application/pdf", pdf_base64),
//!         Part::text("Extract the invoice fields."),
//!     ])
//!     .await?;
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{GeminiError, Result};
pub use schema::StructuredOutput;
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, regional endpoints, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call the `generateContent` endpoint for the given model.
    pub async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, model
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, model, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api(format!("Gemini API error: {}", error_text)));
        }

        let content_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        debug!(
            model,
            duration_ms = start.elapsed().as_millis(),
            candidates = content_response.candidates.len(),
            "Gemini generateContent"
        );

        Ok(content_response)
    }

    /// Type-safe structured output extraction.
    ///
    /// Automatically generates a response schema from the type `T` using
    /// `schemars`, constrains the model to JSON conforming to it, and
    /// deserializes the response.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use schemars::JsonSchema;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize, JsonSchema)]
    /// struct Invoice {
    ///     total: f64,
    /// }
    ///
    /// let invoice: Invoice = client
    ///     .extract("gemini-2.5-flash", vec![Part::text("Extract ...")])
    ///     .await?;
    /// ```
    pub async fn extract<T: StructuredOutput>(
        &self,
        model: &str,
        parts: Vec<Part>,
    ) -> Result<T> {
        let schema = T::gemini_schema();

        debug!(
            type_name = T::type_name(),
            schema = %serde_json::to_string_pretty(&schema).unwrap_or_default(),
            "Generated Gemini response schema for extraction"
        );

        let request = GenerateContentRequest::from_parts(parts)
            .with_config(GenerationConfig::json_schema(schema));

        let response = self.generate_content(model, request).await?;

        let json_str = response
            .text()
            .ok_or_else(|| GeminiError::Api("No response text from Gemini".into()))?;

        serde_json::from_str(&json_str)
            .map_err(|e| GeminiError::Parse(format!("Failed to deserialize response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = GeminiClient::new("test-key").with_base_url("https://custom.api.com");

        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, "https://custom.api.com");
    }
}
