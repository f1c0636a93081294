//! Output normalizer shared by the live and mock paths.
//!
//! Models like to decorate their answer with bold section headers
//! (`**Funny Tone:**`) and list numbering.  [`normalize`] drops the headers,
//! strips one leading `N. ` marker per line and discards blank lines, leaving
//! one caption per line.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static TONE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*.*Tone:\*\*$").expect("valid tone header regex"));

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}\. ").expect("valid list marker regex"));

// ---------------------------------------------------------------------------
// CaptionResult
// ---------------------------------------------------------------------------

/// Ordered captions, one per line.  Three by contract, though live model
/// output is not guaranteed to honour that.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaptionResult {
    captions: Vec<String>,
}

impl CaptionResult {
    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    pub fn len(&self) -> usize {
        self.captions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.captions.iter().map(String::as_str)
    }

    /// Newline-joined transport form.
    pub fn to_text(&self) -> String {
        self.captions.join("\n")
    }
}

impl fmt::Display for CaptionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// ---------------------------------------------------------------------------
// Line rules
// ---------------------------------------------------------------------------

/// `true` for bold headers such as `**Funny & Romantic Tone:**`.
pub fn is_tone_header(line: &str) -> bool {
    TONE_HEADER.is_match(line.trim())
}

/// Remove one leading list marker (one or two ASCII digits, `". "`).
///
/// This is a heuristic: a caption that genuinely starts with a short number
/// followed by `". "` loses that number too.
///
/// ```
/// use caption_studio::caption::strip_list_marker;
///
/// assert_eq!(strip_list_marker("2. Sunny days ahead"), "Sunny days ahead");
/// assert_eq!(strip_list_marker("100. Not a marker"), "100. Not a marker");
/// ```
pub fn strip_list_marker(line: &str) -> &str {
    match LIST_MARKER.find(line) {
        Some(marker) => &line[marker.end()..],
        None => line,
    }
}

/// Clean raw generated text into a [`CaptionResult`].
pub fn normalize(raw: &str) -> CaptionResult {
    let captions = raw
        .lines()
        .map(str::trim_start)
        .filter(|line| !is_tone_header(line))
        .map(|line| strip_list_marker(line).trim())
        .filter(|line| !line.is_empty() && !is_tone_header(line))
        .map(str::to_string)
        .collect();
    CaptionResult { captions }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
