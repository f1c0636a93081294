//! Caption generation flow: mock or live, then normalize.
//!
//! ```text
//! CaptionRequest + GenerationOptions
//!   ├─ use_mock ─────────────────────▶ generate_mock ──┐
//!   ├─ no credential
//!   │    ├─ mock_when_unconfigured ──▶ generate_mock ──┤
//!   │    └─ otherwise ──▶ Err(MissingCredential)       ├─▶ normalize ─▶ CaptionResult
//!   └─ credential ──▶ compose ──▶ CompletionClient ────┘
//!                                   └─ Err ─▶ classify ─▶ Err(CaptionError)
//! ```
//!
//! Completion failures are classified and returned, never retried.

use serde::{Deserialize, Serialize};

use crate::caption::client::{CompletionClient, CompletionError};
use crate::caption::error::CaptionError;
use crate::caption::normalize::{normalize, CaptionResult};
use crate::caption::request::CaptionRequest;
use crate::caption::templates::generate_mock;

// ---------------------------------------------------------------------------
// GenerationOptions
// ---------------------------------------------------------------------------

/// Per-call switches, resolved by the caller from config and input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Skip the completion API and use canned templates.
    pub use_mock: bool,
    /// Fall back to canned templates instead of failing when no credential
    /// is available.
    pub mock_when_unconfigured: bool,
}

impl GenerationOptions {
    pub fn mock() -> Self {
        Self {
            use_mock: true,
            ..Self::default()
        }
    }

    pub fn live() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Markers searched (case-insensitively) in the failure text, in order.
const QUOTA_MARKERS: &[&str] = &["quota", "rate"];
const AUTH_MARKERS: &[&str] = &["authentication"];

/// Classify by message text alone.  `None` when no marker is present.
pub fn classify_message(message: &str) -> Option<CaptionError> {
    let lowered = message.to_lowercase();
    if QUOTA_MARKERS.iter().any(|m| lowered.contains(m)) {
        return Some(CaptionError::QuotaExceeded(message.to_string()));
    }
    if AUTH_MARKERS.iter().any(|m| lowered.contains(m)) {
        return Some(CaptionError::AuthenticationFailure(message.to_string()));
    }
    None
}

/// Map a raw completion failure onto the [`CaptionError`] taxonomy.
///
/// Message markers take precedence; the HTTP status and error kind decide
/// the rest.
pub fn classify(err: &CompletionError) -> CaptionError {
    let message = match err {
        CompletionError::Status { message, .. } => message.clone(),
        other => other.to_string(),
    };

    if let Some(classified) = classify_message(&message) {
        return classified;
    }

    match err {
        CompletionError::Status { status, .. } => match status.as_u16() {
            401 | 403 => CaptionError::AuthenticationFailure(message),
            429 => CaptionError::QuotaExceeded(message),
            s if s >= 500 => CaptionError::TransientApiFailure(message),
            _ => CaptionError::Unknown(message),
        },
        CompletionError::Request(_) => CaptionError::TransientApiFailure(message),
        CompletionError::Parse(_) | CompletionError::EmptyResponse => {
            CaptionError::Unknown(message)
        }
    }
}

// ---------------------------------------------------------------------------
// CaptionGenerator
// ---------------------------------------------------------------------------

/// Runs one caption request through the mock or live path.
pub struct CaptionGenerator {
    client: Box<dyn CompletionClient>,
}

impl CaptionGenerator {
    pub fn new(client: Box<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Canned captions for `request`.  Never fails.
    pub fn generate_offline(request: &CaptionRequest) -> CaptionResult {
        let raw = generate_mock(request.topic(), request.tones(), request.length());
        normalize(&raw)
    }

    /// Generate captions for a validated request.
    pub async fn generate(
        &self,
        request: &CaptionRequest,
        options: &GenerationOptions,
    ) -> Result<CaptionResult, CaptionError> {
        if options.use_mock {
            log::info!("mock mode requested; using caption templates");
            return Ok(Self::generate_offline(request));
        }

        let credential = match request.credential() {
            Some(credential) => credential,
            None if options.mock_when_unconfigured => {
                log::info!("no API key configured; using caption templates");
                return Ok(Self::generate_offline(request));
            }
            None => {
                log::warn!("live captions requested without an API key");
                return Err(CaptionError::MissingCredential);
            }
        };

        let prompt = request.compose();
        log::info!(
            "requesting captions for {} tone(s), length {}",
            request.tones().len(),
            request.length()
        );

        match self.client.complete(&prompt, credential).await {
            Ok(raw) => {
                let result = normalize(&raw);
                if result.len() != 3 {
                    log::warn!("completion returned {} caption(s), expected 3", result.len());
                }
                Ok(result)
            }
            Err(err) => {
                log::error!("completion API error: {err}");
                Err(classify(&err))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
