use crate::error::ValidationError;
use std::fmt;

/// Stylistic suffix appended to every prompt.
pub const PROMPT_SUFFIX: &str = "cinematic, realistic, high detail, 16:9 aspect ratio";

/// Secret API credential. Never printed by `Debug` or `Display`.
///
/// Surrounding whitespace is dropped on construction, so the bearer header,
/// validation and redaction all see the same token.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replace every occurrence of the key in `text` with `***`.
    pub fn redact(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }
        text.replace(self.0.as_str(), "***")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub epoch: String,
    pub action: String,
    pub api_key: ApiKey,
}

impl GenerationRequest {
    pub fn new(
        epoch: impl Into<String>,
        action: impl Into<String>,
        api_key: impl Into<ApiKey>,
    ) -> Self {
        Self {
            epoch: epoch.into(),
            action: action.into(),
            api_key: api_key.into(),
        }
    }

    /// Fields are checked before the key, so a half-filled form reports the
    /// form first.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.epoch.trim().is_empty() || self.action.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingApiKey);
        }
        Ok(())
    }

    pub fn prompt(&self) -> Prompt {
        Prompt::compose(&self.epoch, &self.action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn compose(epoch: &str, action: &str) -> Self {
        Self(format!(
            "{}, {}, {}",
            epoch.trim(),
            action.trim(),
            PROMPT_SUFFIX
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
