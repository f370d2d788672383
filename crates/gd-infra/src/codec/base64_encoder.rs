use anyhow::Result;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gd_core::gif::url::data_url;
use gd_core::ports::InlineEncoderPort;

/// Standard-alphabet, padded base64.
///
/// Encoding runs on the blocking pool so a 10 MiB GIF does not stall the
/// runtime thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64InlineEncoder;

#[async_trait]
impl InlineEncoderPort for Base64InlineEncoder {
    async fn encode_base64(&self, bytes: &[u8]) -> Result<String> {
        let owned = bytes.to_vec();
        let encoded = tokio::task::spawn_blocking(move || STANDARD.encode(owned)).await?;
        Ok(encoded)
    }

    async fn encode_data_url(&self, mime_type: &str, bytes: &[u8]) -> Result<String> {
        let payload = self.encode_base64(bytes).await?;
        Ok(data_url(mime_type, &payload))
    }
}
