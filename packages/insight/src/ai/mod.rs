//! AI gateway implementations.

pub mod gemini;

pub use gemini::{GeminiBillExtractor, GeminiIllustrator, EXTRACTION_MODEL, IMAGE_MODEL};
