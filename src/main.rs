//! Command-line front-end for Caption Studio.
//!
//! # Startup sequence
//!
//! 1. Parse arguments (`OPENAI_API_KEY` / `USE_MOCK` are read here, never in
//!    the library).
//! 2. Initialise logging.
//! 3. Load [`AppConfig`] (defaults when no file exists).
//! 4. Validate the form input into a [`CaptionRequest`].
//! 5. Run [`CaptionGenerator::generate`] under the configured timeout.
//! 6. Print the captions, or the classified error message.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use caption_studio::caption::{
    parse_tones, CaptionError, CaptionGenerator, CaptionRequest, CaptionResult, Length,
    OpenAiClient,
};
use caption_studio::config::AppConfig;

#[derive(Parser)]
#[command(name = "caption-studio")]
#[command(about = "Generate social-media captions for a topic and tone blend")]
#[command(version)]
struct Cli {
    /// What the post is about
    #[arg(long, default_value = "")]
    topic: String,

    /// Comma-separated tones, e.g. "funny, romantic"
    #[arg(long, default_value = "")]
    tone: String,

    /// short, medium or long (defaults to the configured length)
    #[arg(long)]
    length: Option<String>,

    /// Use canned templates instead of the completion API
    #[arg(
        long,
        env = "USE_MOCK",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    mock: bool,

    /// API key for the completion API
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the completion API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Path to settings.toml (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(cli).await {
        Ok(Ok(captions)) => {
            println!("{captions}");
            ExitCode::SUCCESS
        }
        Ok(Err(err)) => {
            log::debug!("generation failed: {} ({})", err.tag(), err);
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Result<CaptionResult, CaptionError>> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.completion.base_url = base_url;
    }

    let length = match cli.length.as_deref().map(str::trim) {
        None | Some("") => config.generation.default_length,
        Some(value) => match value.parse::<Length>() {
            Ok(length) => length,
            Err(err) => return Ok(Err(err)),
        },
    };

    let credential = config.resolve_credential(cli.api_key.as_deref());
    let request =
        match CaptionRequest::new(&cli.topic, &parse_tones(&cli.tone), length, credential) {
            Ok(request) => request,
            Err(err) => return Ok(Err(err)),
        };
    let options = config.generation_options(cli.mock);

    let generator = CaptionGenerator::new(Box::new(OpenAiClient::from_config(&config.completion)));
    let timeout = Duration::from_secs(config.completion.timeout_secs);

    let outcome = match tokio::time::timeout(timeout, generator.generate(&request, &options)).await
    {
        Ok(outcome) => outcome,
        Err(_) => {
            log::error!("completion call exceeded {}s", timeout.as_secs());
            Err(CaptionError::TransientApiFailure(format!(
                "no response within {} seconds",
                timeout.as_secs()
            )))
        }
    };

    if outcome.is_ok() {
        log::info!("captions generated successfully");
    }
    Ok(outcome)
}
