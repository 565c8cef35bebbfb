use crate::core::error::ProbeError;
use async_trait::async_trait;

mod client;
pub mod types;

pub use client::GeminiClient;
use types::{GenerateContentRequest, RawResponse};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Anything that can answer a `generateContent` request.
///
/// The status code is handed back untouched; deciding what a 4xx means is
/// left to the caller.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<RawResponse, ProbeError>;
}
