use crate::{
    error::{GenerationError, Result},
    models::ApiKey,
    stability::ProviderVariant,
};
use std::env;

pub const DEFAULT_HOST: &str = "https://api.stability.ai";
pub const DEFAULT_ENGINE_ID: &str = "stable-diffusion-xl-1024-v1-0";

#[derive(Debug, Clone)]
pub struct StabilityConfig {
    pub api_key: Option<ApiKey>,
    pub variant: ProviderVariant,
    pub host: String,
    pub engine_id: String,
    /// Full URL; when set, `host` and `engine_id` are ignored.
    pub endpoint: Option<String>,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        StabilityConfig {
            api_key: None,
            variant: ProviderVariant::default(),
            host: DEFAULT_HOST.to_string(),
            engine_id: DEFAULT_ENGINE_ID.to_string(),
            endpoint: None,
        }
    }
}

impl StabilityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub(crate) fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| var(key).filter(|val| !val.trim().is_empty());

        let variant = match non_empty("STABILITY_API_VARIANT") {
            Some(val) => val.parse::<ProviderVariant>()?,
            None => ProviderVariant::default(),
        };

        Ok(StabilityConfig {
            api_key: non_empty("STABILITY_API_KEY").map(ApiKey::from),
            variant,
            host: non_empty("STABILITY_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            engine_id: non_empty("STABILITY_ENGINE_ID")
                .unwrap_or_else(|| DEFAULT_ENGINE_ID.to_string()),
            endpoint: non_empty("STABILITY_ENDPOINT"),
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_variant(mut self, variant: ProviderVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_engine_id(mut self, engine_id: impl Into<String>) -> Self {
        self.engine_id = engine_id.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn endpoint_url(&self) -> Result<String> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        if self.host.trim().is_empty() {
            return Err(GenerationError::ConfigError(
                "Stability API host must not be empty".into(),
            ));
        }
        Ok(self.variant.endpoint(&self.host, &self.engine_id))
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|key| !key.is_empty())
    }
}
