//! Error taxonomy for caption generation.
//!
//! [`CaptionError`] is what the front-end receives.  Validation and missing
//! credentials are detected before any prompt is composed; the remaining
//! variants are produced by [`classify`](crate::caption::generator::classify)
//! from a failed completion call.

use thiserror::Error;

// ---------------------------------------------------------------------------
// CaptionError
// ---------------------------------------------------------------------------

/// Errors surfaced by [`CaptionGenerator`](crate::caption::CaptionGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptionError {
    /// The form input was rejected (empty topic, no tones, unknown length).
    #[error("{0}")]
    Validation(String),

    /// Live generation was requested but no API key is available.
    #[error("no API key configured; supply one or enable mock mode")]
    MissingCredential,

    /// The completion API rejected the credential.
    #[error("authentication with the completion API failed: {0}")]
    AuthenticationFailure(String),

    /// The account is out of quota or being rate limited.
    #[error("completion API quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Network trouble, server-side failure or caller timeout.
    #[error("completion API temporarily unavailable: {0}")]
    TransientApiFailure(String),

    /// Any other completion failure.
    #[error("completion API call failed: {0}")]
    Unknown(String),
}

impl CaptionError {
    /// Short machine-readable tag, stable across releases.
    pub fn tag(&self) -> &'static str {
        match self {
            CaptionError::Validation(_) => "validation",
            CaptionError::MissingCredential => "missing_credential",
            CaptionError::AuthenticationFailure(_) => "authentication_failure",
            CaptionError::QuotaExceeded(_) => "quota_exceeded",
            CaptionError::TransientApiFailure(_) => "transient_api_failure",
            CaptionError::Unknown(_) => "unknown",
        }
    }

    /// Text suitable for showing to the person who filled in the form.
    pub fn user_message(&self) -> String {
        match self {
            CaptionError::Validation(msg) => msg.clone(),
            CaptionError::MissingCredential => {
                "Please provide an OpenAI API key or switch to mock mode.".to_string()
            }
            CaptionError::AuthenticationFailure(_) => {
                "Your API key was rejected. Please check it and try again.".to_string()
            }
            CaptionError::QuotaExceeded(_) => {
                "The API quota has been exceeded. Please try again later or use mock mode."
                    .to_string()
            }
            CaptionError::TransientApiFailure(msg) | CaptionError::Unknown(msg) => {
                format!("Failed to generate captions: {msg}")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
