pub mod text_client;

use crate::{error::Result, models::GenerationRequest};
use async_trait::async_trait;

pub use text_client::GeminiTextClient;

/// Transport for one generation call. Returns the raw, untrimmed text.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    fn name(&self) -> &str;
}
