use chronoscene::{
    logger::{self, LoggerConfig},
    output, ApiKey, GenerationRequest, ProviderVariant, StabilityClient, StabilityConfig,
};
use clap::Parser;
use log::LevelFilter;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Generate cinematic 16:9 images of a historical scene.
#[derive(Debug, Parser)]
#[command(name = "chronoscene", version)]
struct Cli {
    /// Historical epoch, e.g. "Edad Media, siglo XV"
    #[arg(long)]
    epoch: Option<String>,

    /// Action or scene, e.g. "Caballeros en batalla al amanecer"
    #[arg(long)]
    action: Option<String>,

    /// Stability AI key; defaults to STABILITY_API_KEY, then a masked prompt
    #[arg(long)]
    api_key: Option<String>,

    /// API contract: v1 (engine text-to-image) or v2beta (generate)
    #[arg(long)]
    variant: Option<ProviderVariant>,

    /// Full endpoint URL override
    #[arg(long)]
    endpoint: Option<String>,

    /// Where imagen_N.png files are written
    #[arg(long, default_value = "generated")]
    output_dir: PathBuf,

    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON log lines
    #[arg(long)]
    json_logs: bool,

    /// Also append logs to this file
    #[arg(long)]
    log_file: Option<String>,
}

fn ask(label: &str) -> io::Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{}: ", label)?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Configured key first; otherwise ask, without echo, like a password field.
fn resolve_api_key<F>(configured: Option<ApiKey>, prompt: F) -> io::Result<ApiKey>
where
    F: FnOnce() -> io::Result<String>,
{
    match configured.filter(|key| !key.is_empty()) {
        Some(key) => Ok(key),
        None => prompt().map(ApiKey::new),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();
    let cli = Cli::parse();

    let mut logger_config = match (cli.json_logs, cli.verbose) {
        (true, true) => LoggerConfig::production().with_level(LevelFilter::Debug),
        (true, false) => LoggerConfig::production(),
        (false, true) => LoggerConfig::development(),
        (false, false) => LoggerConfig::default(),
    };
    if let Some(path) = &cli.log_file {
        logger_config = logger_config.with_file_output(path);
    }
    logger::init_with_config(logger_config)?;

    if dotenv_loaded {
        log::debug!("✅ .env file loaded");
    } else {
        log::debug!("No .env file found, using system environment variables");
    }

    let mut config = StabilityConfig::from_env()?;
    if let Some(key) = cli.api_key {
        config = config.with_api_key(key);
    }
    if let Some(variant) = cli.variant {
        config = config.with_variant(variant);
    }
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    logger::log_config_info(&config);

    let epoch = match cli.epoch {
        Some(epoch) => epoch,
        None => ask("📜 Historical epoch")?,
    };
    let action = match cli.action {
        Some(action) => action,
        None => ask("🎬 Action or scene")?,
    };

    let api_key = resolve_api_key(config.api_key.clone(), || {
        rpassword::prompt_password("🔐 Stability AI API key: ")
    })?;

    let client = StabilityClient::new(&config)?;
    let request = GenerationRequest::new(epoch, action, api_key);

    log::info!("🎨 Generating images...");
    let images = match client.generate(&request).await {
        Ok(images) => images,
        Err(e) if e.is_validation() => {
            log::warn!("⚠️  {}", e);
            return Err(e.into());
        }
        Err(e) => {
            log::error!("❌ Error generating images: {}", e);
            return Err(e.into());
        }
    };

    let paths = output::save_images(&images, &cli.output_dir).await?;
    log::info!(
        "✅ Generated {} images in {}",
        paths.len(),
        cli.output_dir.display()
    );
    for path in paths {
        println!("{}", path.display());
    }

    Ok(())
}
