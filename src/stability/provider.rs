use crate::{
    error::GenerationError,
    models::{GenerationPayload, Prompt},
};
use std::{fmt, str::FromStr};

/// Stability AI API contract the client speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderVariant {
    /// `/v1/generation/{engine}/text-to-image`, explicit width and height.
    #[default]
    LegacyV1,
    /// `/v2beta/stable-image/generate/core`, aspect ratio field.
    CurrentV2beta,
}

impl ProviderVariant {
    pub fn endpoint(&self, host: &str, engine_id: &str) -> String {
        let host = host.trim_end_matches('/');
        match self {
            ProviderVariant::LegacyV1 => {
                format!("{}/v1/generation/{}/text-to-image", host, engine_id)
            }
            ProviderVariant::CurrentV2beta => format!("{}/v2beta/stable-image/generate/core", host),
        }
    }

    pub fn build_payload(&self, prompt: Prompt) -> GenerationPayload {
        match self {
            ProviderVariant::LegacyV1 => GenerationPayload::legacy(prompt),
            ProviderVariant::CurrentV2beta => GenerationPayload::current(prompt),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderVariant::LegacyV1 => "v1",
            ProviderVariant::CurrentV2beta => "v2beta",
        }
    }
}

impl fmt::Display for ProviderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderVariant {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "legacy" | "legacyv1" => Ok(ProviderVariant::LegacyV1),
            "v2beta" | "current" | "currentv2beta" => Ok(ProviderVariant::CurrentV2beta),
            other => Err(GenerationError::ConfigError(format!(
                "unknown provider variant '{}', expected 'v1' or 'v2beta'",
                other
            ))),
        }
    }
}
