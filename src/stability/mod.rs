pub mod provider;
pub mod transport;

use crate::{
    config::StabilityConfig,
    error::{GenerationError, Result},
    logger,
    models::{DecodedImage, GenerationPayload, GenerationRequest, GenerationResponse},
};
use std::sync::Arc;

pub use provider::ProviderVariant;
pub use transport::{HttpTransport, ImageTransport, TransportResponse};

/// Turns an epoch and a scene into decoded images with one API call.
///
/// The client holds only the endpoint and the transport; the API key travels
/// with each [`GenerationRequest`], so one client can serve many users.
#[derive(Clone)]
pub struct StabilityClient {
    transport: Arc<dyn ImageTransport>,
    variant: ProviderVariant,
    endpoint: String,
}

impl StabilityClient {
    pub fn new(config: &StabilityConfig) -> Result<Self> {
        Self::with_transport(config, Arc::new(HttpTransport::default()))
    }

    pub fn with_transport(
        config: &StabilityConfig,
        transport: Arc<dyn ImageTransport>,
    ) -> Result<Self> {
        Ok(Self {
            transport,
            variant: config.variant,
            endpoint: config.endpoint_url()?,
        })
    }

    pub fn variant(&self) -> ProviderVariant {
        self.variant
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_payload(&self, request: &GenerationRequest) -> GenerationPayload {
        self.variant.build_payload(request.prompt())
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<Vec<DecodedImage>> {
        request.validate()?;

        let payload = self.build_payload(request);
        log::info!(
            "Generating {} images via Stability {} at {}",
            payload.samples(),
            self.variant,
            self.endpoint
        );
        log::debug!("Prompt: {}", payload.prompt_text());

        let response = {
            let _timer = logger::timer("stability text-to-image");
            self.transport
                .post_json(&self.endpoint, &request.api_key, &payload)
                .await?
        };

        if !response.is_success() {
            log::error!("Stability API answered HTTP {}", response.status);
            return Err(GenerationError::ProviderError {
                status: response.status,
                body: request.api_key.redact(&response.body),
            });
        }

        let images = GenerationResponse::parse(&response.body)?.into_images()?;

        let requested = payload.samples() as usize;
        if images.len() < requested {
            log::warn!(
                "Provider returned {} of {} requested images",
                images.len(),
                requested
            );
        } else {
            log::info!("Generated {} images", images.len());
        }

        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::transport::testing::RecordingTransport;
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde_json::json;

    const KEY: &str = "sk-test-0123456789";

    fn client_with(
        variant: ProviderVariant,
        transport: Arc<RecordingTransport>,
    ) -> StabilityClient {
        let config = StabilityConfig::new()
            .with_variant(variant)
            .with_host("http://stability.test");
        StabilityClient::with_transport(&config, transport).unwrap()
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new(
            "Edad Media, siglo XV",
            "Caballeros en batalla al amanecer",
            KEY,
        )
    }

    fn artifacts_body(images: &[&[u8]]) -> String {
        let artifacts: Vec<_> = images
            .iter()
            .map(|bytes| json!({"base64": STANDARD.encode(bytes), "finishReason": "SUCCESS"}))
            .collect();
        json!({ "artifacts": artifacts }).to_string()
    }

    #[tokio::test]
    async fn test_validation_makes_no_http_call() {
        let transport = Arc::new(RecordingTransport::new(200, artifacts_body(&[b"x"])));
        let client = client_with(ProviderVariant::LegacyV1, transport.clone());

        for (epoch, action, key) in [
            ("", "Battle", KEY),
            ("Rome", "", KEY),
            ("Rome", "Battle", ""),
        ] {
            let err = client
                .generate(&GenerationRequest::new(epoch, action, key))
                .await
                .unwrap_err();
            assert!(err.is_validation(), "unexpected error {:?}", err);
        }

        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_legacy_request_on_the_wire() {
        let transport = Arc::new(RecordingTransport::new(200, artifacts_body(&[b"one"])));
        let client = client_with(ProviderVariant::LegacyV1, transport.clone());

        client.generate(&request()).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(
            call.url,
            "http://stability.test/v1/generation/stable-diffusion-xl-1024-v1-0/text-to-image"
        );
        assert_eq!(call.api_key, KEY);
        assert_eq!(call.payload["samples"], 5);
        assert_eq!(call.payload["steps"], 30);
        assert_eq!(call.payload["cfg_scale"], 8.0);
        assert_eq!(call.payload["width"], 1024);
        assert_eq!(call.payload["height"], 576);
        let text = call.payload["text_prompts"][0]["text"].as_str().unwrap();
        assert!(text.contains("Edad Media, siglo XV"));
        assert!(text.contains("Caballeros en batalla al amanecer"));
        assert!(text.contains("cinematic, realistic, high detail"));
    }

    #[tokio::test]
    async fn test_current_request_on_the_wire() {
        let transport = Arc::new(RecordingTransport::new(200, artifacts_body(&[b"one"])));
        let client = client_with(ProviderVariant::CurrentV2beta, transport.clone());

        client.generate(&request()).await.unwrap();

        let call = &transport.calls()[0];
        assert_eq!(
            call.url,
            "http://stability.test/v2beta/stable-image/generate/core"
        );
        assert_eq!(call.payload["aspect_ratio"], "16:9");
        assert_eq!(call.payload["output_format"], "png");
        assert_eq!(call.payload["samples"], 5);
        assert_eq!(call.payload["steps"], 30);
        assert_eq!(call.payload["cfg_scale"], 8.0);
        assert!(call.payload.get("width").is_none());
    }

    #[tokio::test]
    async fn test_images_come_back_in_order() {
        let transport = Arc::new(RecordingTransport::new(
            200,
            artifacts_body(&[b"first image", b"second image"]),
        ));
        let client = client_with(ProviderVariant::LegacyV1, transport);

        let images = client.generate(&request()).await.unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].bytes, b"first image");
        assert_eq!(images[1].bytes, b"second image");
        assert_eq!(images[0].file_name(), "imagen_1.png");
    }

    #[tokio::test]
    async fn test_empty_artifacts_is_a_soft_failure() {
        let transport = Arc::new(RecordingTransport::new(200, r#"{"artifacts":[]}"#));
        let client = client_with(ProviderVariant::LegacyV1, transport);

        let err = client.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResultError));
    }

    #[tokio::test]
    async fn test_invalid_base64_yields_no_images() {
        let body = json!({
            "artifacts": [
                {"base64": STANDARD.encode(b"good")},
                {"base64": "%%%not-base64%%%"}
            ]
        })
        .to_string();
        let transport = Arc::new(RecordingTransport::new(200, body));
        let client = client_with(ProviderVariant::LegacyV1, transport);

        let err = client.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::DecodeError { index: 1, .. }));
    }

    #[tokio::test]
    async fn test_auth_failures_never_leak_the_key() {
        for status in [401u16, 403] {
            let body = format!(
                r#"{{"id":"x","name":"unauthorized","message":"invalid key {}"}}"#,
                KEY
            );
            let transport = Arc::new(RecordingTransport::new(status, body));
            let client = client_with(ProviderVariant::LegacyV1, transport);

            let err = client.generate(&request()).await.unwrap_err();
            assert_eq!(err.status(), Some(status));
            assert!(!err.to_string().contains(KEY));
            assert!(!format!("{:?}", err).contains(KEY));
        }
    }

    #[tokio::test]
    async fn test_pasted_key_is_redacted_from_provider_body() {
        let transport = Arc::new(RecordingTransport::new(
            401,
            r#"{"message":"invalid key sk-abc"}"#,
        ));
        let client = client_with(ProviderVariant::LegacyV1, transport.clone());

        let err = client
            .generate(&GenerationRequest::new("a", "b", "sk-abc\n"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert!(!err.to_string().contains("sk-abc"));
        assert_eq!(transport.calls()[0].api_key, "sk-abc");
    }

    #[tokio::test]
    async fn test_partial_batch_is_success() {
        let transport = Arc::new(RecordingTransport::new(
            200,
            artifacts_body(&[b"a", b"b", b"c"]),
        ));
        let client = client_with(ProviderVariant::LegacyV1, transport);

        let images = client.generate(&request()).await.unwrap();
        assert_eq!(images.len(), 3);
    }

    #[tokio::test]
    async fn test_client_is_reusable_after_failure() {
        let transport = Arc::new(RecordingTransport::new(500, "internal error"));
        let client = client_with(ProviderVariant::LegacyV1, transport.clone());

        assert!(client.generate(&request()).await.is_err());
        assert!(client.generate(&request()).await.is_err());
        assert_eq!(transport.calls().len(), 2);
    }
}
