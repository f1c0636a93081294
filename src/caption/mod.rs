//! Caption generation core.
//!
//! This module provides:
//! * [`CaptionRequest`] / [`Length`] / [`Credential`] — validated form input.
//! * [`compose`] — builds the completion prompt ([`ComposedPrompt`]).
//! * [`generate_mock`] — canned captions from the tone template table.
//! * [`normalize`] — cleans generated text into a [`CaptionResult`].
//! * [`CompletionClient`] / [`OpenAiClient`] — the completion API boundary.
//! * [`CaptionGenerator`] — mock-or-live flow with error classification.
//! * [`CaptionError`] — error variants surfaced to the front-end.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use caption_studio::caption::{
//!     CaptionGenerator, CaptionRequest, Credential, GenerationOptions, OpenAiClient,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let generator = CaptionGenerator::new(Box::new(OpenAiClient::new("https://api.openai.com")));
//!     let request = CaptionRequest::from_form(
//!         "coffee",
//!         "funny, romantic",
//!         Some("short"),
//!         Credential::new("sk-..."),
//!     )
//!     .unwrap();
//!
//!     let captions = generator
//!         .generate(&request, &GenerationOptions::live())
//!         .await
//!         .unwrap();
//!     println!("{captions}");
//! }
//! ```

pub mod client;
pub mod error;
pub mod generator;
pub mod normalize;
pub mod prompt;
pub mod request;
pub mod templates;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{CompletionClient, CompletionError, OpenAiClient};
pub use error::CaptionError;
pub use generator::{classify, CaptionGenerator, GenerationOptions};
pub use normalize::{is_tone_header, normalize, strip_list_marker, CaptionResult};
pub use prompt::{compose, describe_tones, ComposedPrompt, SYSTEM_PERSONA};
pub use request::{parse_tones, CaptionRequest, Credential, Length};
pub use templates::{generate_mock, select_template, ToneTemplate};
