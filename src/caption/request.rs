//! Caption request value objects built from raw form input.
//!
//! * [`parse_tones`] — comma-separated tone list → ordered, de-duplicated labels.
//! * [`Length`] — desired caption length (`short` / `medium` / `long`).
//! * [`Credential`] — opaque API secret with a redacted `Debug`.
//! * [`CaptionRequest`] — validated topic + tones + length + credential.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::caption::error::CaptionError;

/// Shown when the topic field is blank.
pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic.";
/// Shown when no usable tone was selected.
pub const EMPTY_TONE_MESSAGE: &str = "Please select a tone.";

// ---------------------------------------------------------------------------
// Tone parsing
// ---------------------------------------------------------------------------

/// Split a comma-separated tone string into labels.
///
/// Segments are trimmed; empty segments and case-insensitive duplicates are
/// dropped.  The first spelling of each tone wins and order is preserved.
///
/// ```
/// use caption_studio::caption::parse_tones;
///
/// assert_eq!(parse_tones("funny,,  romantic ,,"), vec!["funny", "romantic"]);
/// ```
pub fn parse_tones(raw: &str) -> Vec<String> {
    let mut tones: Vec<String> = Vec::new();
    for segment in raw.split(',') {
        let tone = segment.trim();
        if tone.is_empty() {
            continue;
        }
        if tones.iter().any(|seen| seen.eq_ignore_ascii_case(tone)) {
            continue;
        }
        tones.push(tone.to_string());
    }
    tones
}

// ---------------------------------------------------------------------------
// Length
// ---------------------------------------------------------------------------

/// How long each generated caption should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    /// 1-2 sentences.
    Short,
    /// 3-4 sentences.
    #[default]
    Medium,
    /// 5 or more sentences.
    Long,
}

impl Length {
    /// Parse the optional form value; absent or blank input means `Medium`.
    pub fn from_form(value: Option<&str>) -> Result<Self, CaptionError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Length::default()),
            Some(v) => v.parse(),
        }
    }

    /// Instruction phrase embedded in the composed prompt.
    pub fn instruction(self) -> &'static str {
        match self {
            Length::Short => "1-2 sentences, concise and punchy",
            Length::Medium => "3-4 sentences, balanced detail",
            Length::Long => "5+ sentences, detailed and storytelling",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }
}

impl FromStr for Length {
    type Err = CaptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Length::Short),
            "medium" => Ok(Length::Medium),
            "long" => Ok(Length::Long),
            other => Err(CaptionError::Validation(format!(
                "Unknown caption length '{other}'; choose short, medium or long."
            ))),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Credential
// ---------------------------------------------------------------------------

/// API secret passed through to the completion client.  Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap `secret`, returning `None` when it is blank.
    ///
    /// Surrounding whitespace is trimmed before storing, so a key pasted with
    /// a trailing newline still forms a valid `Authorization` header.  The
    /// rest of the value is kept as given.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            None
        } else {
            Some(Self(secret.trim().to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

// ---------------------------------------------------------------------------
// CaptionRequest
// ---------------------------------------------------------------------------

/// A validated caption request.  Topic and tone list are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionRequest {
    topic: String,
    tones: Vec<String>,
    length: Length,
    credential: Option<Credential>,
}

impl CaptionRequest {
    /// Build a request from already-split tones.
    ///
    /// The tones are re-normalized with the same rules as [`parse_tones`].
    pub fn new(
        topic: &str,
        tones: &[String],
        length: Length,
        credential: Option<Credential>,
    ) -> Result<Self, CaptionError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(CaptionError::Validation(EMPTY_TOPIC_MESSAGE.into()));
        }
        let tones = parse_tones(&tones.join(","));
        if tones.is_empty() {
            return Err(CaptionError::Validation(EMPTY_TONE_MESSAGE.into()));
        }
        Ok(Self {
            topic: topic.to_string(),
            tones,
            length,
            credential,
        })
    }

    /// Build a request straight from form fields.
    ///
    /// Topic is checked before tone, so a form with both blank reports the
    /// missing topic.
    pub fn from_form(
        topic: &str,
        tone_csv: &str,
        length: Option<&str>,
        credential: Option<Credential>,
    ) -> Result<Self, CaptionError> {
        if topic.trim().is_empty() {
            return Err(CaptionError::Validation(EMPTY_TOPIC_MESSAGE.into()));
        }
        let tones = parse_tones(tone_csv);
        let length = Length::from_form(length)?;
        Self::new(topic, &tones, length, credential)
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn tones(&self) -> &[String] {
        &self.tones
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tones_drops_empty_segments_and_whitespace() {
        assert_eq!(parse_tones("funny,,  romantic ,,"), vec!["funny", "romantic"]);
    }

    #[test]
    fn parse_tones_preserves_order_and_drops_duplicates() {
        assert_eq!(
            parse_tones("chill, Funny, chill, funny, bold"),
            vec!["chill", "Funny", "bold"]
        );
    }

    #[test]
    fn parse_tones_of_blank_input_is_empty() {
        assert!(parse_tones("").is_empty());
        assert!(parse_tones(" , ,, ").is_empty());
    }

    #[test]
    fn length_defaults_to_medium() {
        assert_eq!(Length::from_form(None).unwrap(), Length::Medium);
        assert_eq!(Length::from_form(Some("  ")).unwrap(), Length::Medium);
        assert_eq!(Length::default(), Length::Medium);
    }

    #[test]
    fn length_parses_case_insensitively() {
        assert_eq!("SHORT".parse::<Length>().unwrap(), Length::Short);
        assert_eq!(" long ".parse::<Length>().unwrap(), Length::Long);
    }

    #[test]
    fn unknown_length_is_a_validation_error() {
        let err = Length::from_form(Some("epic")).unwrap_err();
        assert!(matches!(err, CaptionError::Validation(_)));
    }

    #[test]
    fn length_instructions_match_fixed_phrases() {
        assert_eq!(Length::Short.instruction(), "1-2 sentences, concise and punchy");
        assert_eq!(Length::Medium.instruction(), "3-4 sentences, balanced detail");
        assert_eq!(
            Length::Long.instruction(),
            "5+ sentences, detailed and storytelling"
        );
    }

    #[test]
    fn blank_credential_is_absent() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   ").is_none());
    }

    #[test]
    fn credential_trims_only_surrounding_whitespace() {
        assert_eq!(Credential::new(" sk-1 ").unwrap().expose(), "sk-1");
        assert_eq!(Credential::new("sk-proj-a b\n").unwrap().expose(), "sk-proj-a b");
    }

    #[test]
    fn credential_debug_is_redacted() {
        let cred = Credential::new("sk-secret").unwrap();
        let printed = format!("{cred:?}");
        assert!(!printed.contains("sk-secret"));
    }

    #[test]
    fn empty_topic_is_rejected() {
        let err = CaptionRequest::from_form("  ", "funny", None, None).unwrap_err();
        assert_eq!(err, CaptionError::Validation(EMPTY_TOPIC_MESSAGE.into()));
    }

    #[test]
    fn empty_tone_list_is_rejected() {
        let err = CaptionRequest::from_form("coffee", " ,, ", None, None).unwrap_err();
        assert_eq!(err, CaptionError::Validation(EMPTY_TONE_MESSAGE.into()));
    }

    #[test]
    fn from_form_builds_trimmed_request() {
        let req = CaptionRequest::from_form(" coffee ", "funny, romantic", Some("short"), None)
            .unwrap();
        assert_eq!(req.topic(), "coffee");
        assert_eq!(req.tones(), ["funny", "romantic"]);
        assert_eq!(req.length(), Length::Short);
        assert!(req.credential().is_none());
    }
}
