use serde::Serialize;

use super::Prompt;

pub const SAMPLES: u32 = 5;
pub const STEPS: u32 = 30;
pub const CFG_SCALE: f32 = 8.0;
pub const WIDTH: u32 = 1024;
pub const HEIGHT: u32 = 576;
pub const ASPECT_RATIO: &str = "16:9";
pub const CLIP_GUIDANCE_PRESET: &str = "FAST_BLUE";
pub const OUTPUT_FORMAT: &str = "png";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPrompt {
    pub text: String,
}

/// Body for the v1 `text-to-image` engine endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegacyPayload {
    pub text_prompts: Vec<TextPrompt>,
    pub cfg_scale: f32,
    pub clip_guidance_preset: String,
    pub height: u32,
    pub width: u32,
    pub samples: u32,
    pub steps: u32,
}

/// Body for the v2beta `generate` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentPayload {
    pub prompt: String,
    pub aspect_ratio: String,
    pub output_format: String,
    pub samples: u32,
    pub steps: u32,
    pub cfg_scale: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenerationPayload {
    Legacy(LegacyPayload),
    Current(CurrentPayload),
}

impl GenerationPayload {
    pub fn legacy(prompt: Prompt) -> Self {
        GenerationPayload::Legacy(LegacyPayload {
            text_prompts: vec![TextPrompt {
                text: prompt.into_string(),
            }],
            cfg_scale: CFG_SCALE,
            clip_guidance_preset: CLIP_GUIDANCE_PRESET.to_string(),
            height: HEIGHT,
            width: WIDTH,
            samples: SAMPLES,
            steps: STEPS,
        })
    }

    pub fn current(prompt: Prompt) -> Self {
        GenerationPayload::Current(CurrentPayload {
            prompt: prompt.into_string(),
            aspect_ratio: ASPECT_RATIO.to_string(),
            output_format: OUTPUT_FORMAT.to_string(),
            samples: SAMPLES,
            steps: STEPS,
            cfg_scale: CFG_SCALE,
        })
    }

    pub fn samples(&self) -> u32 {
        match self {
            GenerationPayload::Legacy(p) => p.samples,
            GenerationPayload::Current(p) => p.samples,
        }
    }

    pub fn prompt_text(&self) -> &str {
        match self {
            GenerationPayload::Legacy(p) => p
                .text_prompts
                .first()
                .map(|t| t.text.as_str())
                .unwrap_or_default(),
            GenerationPayload::Current(p) => &p.prompt,
        }
    }
}
