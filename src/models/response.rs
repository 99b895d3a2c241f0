use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use super::DecodedImage;
use crate::error::{GenerationError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    pub base64: String,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(rename = "finishReason", default)]
    pub finish_reason: Option<String>,
}

impl Artifact {
    /// Anything other than `SUCCESS` (e.g. `CONTENT_FILTERED`) is still
    /// returned, but callers may want to flag it.
    pub fn is_filtered(&self) -> bool {
        self.finish_reason
            .as_deref()
            .is_some_and(|reason| reason != "SUCCESS")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl GenerationResponse {
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| {
            GenerationError::ResponseError(format!("invalid generation response: {}", e))
        })
    }

    /// Decodes every artifact in order. One bad payload fails the whole batch.
    pub fn into_images(self) -> Result<Vec<DecodedImage>> {
        if self.artifacts.is_empty() {
            return Err(GenerationError::EmptyResultError);
        }

        for (index, artifact) in self.artifacts.iter().enumerate() {
            if artifact.is_filtered() {
                log::warn!(
                    "Artifact {} finished with {:?}",
                    index + 1,
                    artifact.finish_reason
                );
            }
            if let Some(seed) = artifact.seed {
                log::debug!("Artifact {} seed: {}", index + 1, seed);
            }
        }

        self.artifacts
            .into_iter()
            .enumerate()
            .map(|(index, artifact)| {
                decode_base64(&artifact.base64)
                    .map(|bytes| DecodedImage::new(index, bytes))
                    .map_err(|source| GenerationError::DecodeError { index, source })
            })
            .collect()
    }
}

fn decode_base64(data: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    // Some providers wrap long payloads across lines.
    if data.contains(['\n', '\r']) {
        let joined: String = data.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        return STANDARD.decode(joined);
    }
    STANDARD.decode(data)
}
