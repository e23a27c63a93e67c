//! Gateway trait abstractions.
//!
//! Implementations wrap specific providers and handle the specifics of
//! prompting and response parsing; mocks live in [`crate::testing`].

use async_trait::async_trait;

use crate::error::ExtractResult;
use crate::types::BillData;

/// Bill extraction gateway.
#[async_trait]
pub trait BillExtractor: Send + Sync {
    /// Extract structured bill data from raw PDF bytes.
    ///
    /// Fails with a typed error when the service returns no usable payload;
    /// the caller surfaces that as a single retry-prompting message.
    async fn extract(&self, pdf: &[u8]) -> ExtractResult<BillData>;
}

/// Illustration gateway.
///
/// Every method returns a `data:` URI on success and an empty string on any
/// failure, so the caller can always render a placeholder instead of
/// handling errors.
#[async_trait]
pub trait Illustrator: Send + Sync {
    /// Generate the rank badge mascot for a bill's visual prompt.
    async fn rank_badge(&self, visual_prompt: &str) -> String;

    /// Generate the helpful-neighbor persona portrait.
    async fn persona(&self, prompt: &str) -> String;

    /// Generate a tip-visualization collage in the style of the base image.
    async fn collage(&self, tip: &str, base_image_png: &[u8]) -> String;
}
