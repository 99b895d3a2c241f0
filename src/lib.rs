//! Historical scene generator on top of the Stability AI text-to-image API.
//!
//! ```no_run
//! use chronoscene::{GenerationRequest, StabilityClient, StabilityConfig};
//!
//! # async fn run() -> chronoscene::Result<()> {
//! let config = StabilityConfig::from_env()?;
//! let client = StabilityClient::new(&config)?;
//! let request = GenerationRequest::new(
//!     "Edad Media, siglo XV",
//!     "Caballeros en batalla al amanecer",
//!     config.api_key.clone().unwrap_or_else(|| "".into()),
//! );
//! let images = client.generate(&request).await?;
//! chronoscene::output::save_images(&images, "generated").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod output;
pub mod stability;

pub use config::StabilityConfig;
pub use error::{GenerationError, Result, ValidationError};
pub use models::{ApiKey, DecodedImage, GenerationPayload, GenerationRequest, Prompt};
pub use stability::{HttpTransport, ImageTransport, ProviderVariant, StabilityClient};
