use crate::core::error::ProbeError;
use crate::gemini::ContentGenerator;
use crate::gemini::types::{GenerateContentRequest, RawResponse};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

#[derive(Clone)]
pub struct GeminiClient {
    pub model: String,
    base_url: String,
    api_key: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Result<Self, ProbeError> {
        let client = Client::builder().build()?;
        Ok(Self {
            model,
            base_url,
            api_key,
            client,
        })
    }

    /// The key goes into the query string verbatim.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<RawResponse, ProbeError> {
        debug!(model = %self.model, base_url = %self.base_url, "sending generateContent");

        let response = self
            .client
            .post(self.endpoint_url())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "received generateContent response");

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CannedServer, UNUSED_LOCAL_URL};
    use serde_json::json;

    fn client(base_url: String) -> GeminiClient {
        GeminiClient::new(
            base_url,
            "test-key-123".to_string(),
            "gemini-1.5-flash-latest".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn endpoint_url_interpolates_model_and_key() {
        let client = client("https://generativelanguage.googleapis.com/".to_string());
        assert_eq!(
            client.endpoint_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent?key=test-key-123"
        );
    }

    #[tokio::test]
    async fn posts_json_with_key_in_query() {
        let server = CannedServer::start(200, r#"{"ok":true}"#).await;
        let request = GenerateContentRequest::from_prompt("ping");

        let response = client(server.url()).generate_content(&request).await.unwrap();
        assert_eq!(
            response,
            RawResponse {
                status: 200,
                body: r#"{"ok":true}"#.to_string()
            }
        );

        let captured = server.captured().await;
        assert_eq!(captured.method, "POST");
        assert_eq!(
            captured.path,
            "/v1beta/models/gemini-1.5-flash-latest:generateContent?key=test-key-123"
        );
        assert_eq!(
            captured.header("content-type").as_deref(),
            Some("application/json")
        );
        let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
        assert_eq!(sent, json!({"contents": [{"parts": [{"text": "ping"}]}]}));
    }

    #[tokio::test]
    async fn error_statuses_are_returned_not_raised() {
        let server = CannedServer::start(400, r#"{"error":{"code":400}}"#).await;
        let response = client(server.url())
            .generate_content(&GenerateContentRequest::from_prompt("ping"))
            .await
            .unwrap();
        assert_eq!(response.status, 400);
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let err = client(UNUSED_LOCAL_URL.to_string())
            .generate_content(&GenerateContentRequest::from_prompt("ping"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::Network(_)), "{err:?}");
    }
}
