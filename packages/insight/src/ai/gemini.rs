//! Gemini implementations of the extraction and illustration gateways.
//!
//! The client is constructed once with its key and injected here; gateways
//! never build their own clients per call.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use gemini_client::{
    GeminiClient, GenerateContentRequest, GenerationConfig, Part, StructuredOutput,
};

use crate::error::{ExtractError, ExtractResult};
use crate::prompts;
use crate::traits::{BillExtractor, Illustrator};
use crate::types::BillData;

/// Model used for structured bill extraction.
pub const EXTRACTION_MODEL: &str = "gemini-2.5-flash";

/// Model used for illustration generation.
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Gemini-backed bill extraction gateway.
#[derive(Clone)]
pub struct GeminiBillExtractor {
    client: GeminiClient,
    model: String,
}

impl GeminiBillExtractor {
    /// Create an extractor using the default extraction model.
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: EXTRACTION_MODEL.to_string(),
        }
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl BillExtractor for GeminiBillExtractor {
    async fn extract(&self, pdf: &[u8]) -> ExtractResult<BillData> {
        let parts = vec![
            Part::inline_data("application/pdf", BASE64.encode(pdf)),
            Part::text(prompts::BILL_INSTRUCTIONS),
        ];

        let request = GenerateContentRequest::from_parts(parts)
            .with_config(GenerationConfig::json_schema(BillData::gemini_schema()));

        tracing::info!(model = %self.model, pdf_bytes = pdf.len(), "Analyzing bill");

        let response = self
            .client
            .generate_content(&self.model, request)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model = %self.model, "Bill analysis failed");
                ExtractError::Service(Box::new(e))
            })?;

        let json_str = response.text().ok_or(ExtractError::NoData)?;

        serde_json::from_str(&json_str).map_err(|e| {
            tracing::error!(error = %e, "Extraction payload did not match bill schema");
            ExtractError::Malformed(e.to_string())
        })
    }
}

/// Gemini-backed illustration gateway.
///
/// Never fails the caller: any error degrades to an empty string so the UI
/// renders a placeholder.
#[derive(Clone)]
pub struct GeminiIllustrator {
    client: GeminiClient,
    model: String,
}

impl GeminiIllustrator {
    /// Create an illustrator using the default image model.
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: IMAGE_MODEL.to_string(),
        }
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Run one image request, degrading every failure to an empty string.
    async fn generate(&self, kind: &str, parts: Vec<Part>) -> String {
        let request = GenerateContentRequest::from_parts(parts);

        match self.client.generate_content(&self.model, request).await {
            Ok(response) => match response.inline_data() {
                Some(blob) => format!("data:{};base64,{}", blob.mime_type, blob.data),
                None => {
                    tracing::warn!(kind, "Illustration response contained no image");
                    String::new()
                }
            },
            Err(e) => {
                tracing::warn!(kind, error = %e, "Illustration generation failed");
                String::new()
            }
        }
    }
}

#[async_trait]
impl Illustrator for GeminiIllustrator {
    async fn rank_badge(&self, visual_prompt: &str) -> String {
        let prompt = prompts::rank_badge_prompt(visual_prompt);
        self.generate("rank_badge", vec![Part::text(prompt)]).await
    }

    async fn persona(&self, prompt: &str) -> String {
        let prompt = prompts::persona_prompt(prompt);
        self.generate("persona", vec![Part::text(prompt)]).await
    }

    async fn collage(&self, tip: &str, base_image_png: &[u8]) -> String {
        let parts = vec![
            Part::inline_data("image/png", BASE64.encode(base_image_png)),
            Part::text(prompts::collage_prompt(tip)),
        ];
        self.generate("collage", parts).await
    }
}
