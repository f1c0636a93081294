//! Prompt composer for caption generation.
//!
//! [`compose`] turns `(topic, tones, length)` into a [`ComposedPrompt`]: a
//! fixed system persona plus a user instruction that asks for exactly three
//! numbered captions, each blending every selected tone.  Nothing here talks
//! to the network.

use crate::caption::request::{CaptionRequest, Length};

// ---------------------------------------------------------------------------
// System persona
// ---------------------------------------------------------------------------

/// Persona sent as the system message on every completion call.
pub const SYSTEM_PERSONA: &str = "You are a creative Instagram expert.";

// ---------------------------------------------------------------------------
// ComposedPrompt
// ---------------------------------------------------------------------------

/// Immutable `(system, user)` message pair for a chat-completions call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    system: &'static str,
    user: String,
}

impl ComposedPrompt {
    pub fn system(&self) -> &str {
        self.system
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// `(role, content)` pairs in wire order.
    pub fn messages(&self) -> [(&'static str, &str); 2] {
        [("system", self.system), ("user", &self.user)]
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Describe the tone blend in prose.
///
/// * one tone: the label itself
/// * two tones: `"A and B combined"`
/// * three or more: `"A, B, and C blended together"`
///
/// ```
/// use caption_studio::caption::describe_tones;
///
/// let tones = vec!["funny".to_string(), "chill".to_string(), "bold".to_string()];
/// assert_eq!(describe_tones(&tones), "funny, chill, and bold blended together");
/// ```
pub fn describe_tones(tones: &[String]) -> String {
    match tones {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second} combined"),
        [init @ .., last] => format!("{}, and {last} blended together", init.join(", ")),
    }
}

/// Build the completion prompt.  Callers validate topic and tones first.
pub fn compose(topic: &str, tones: &[String], length: Length) -> ComposedPrompt {
    let tone_description = describe_tones(tones);
    let tone_list = tones.join(", ");

    let mut user = String::with_capacity(1024);
    user.push_str(&format!(
        "Generate exactly 3 engaging Instagram captions for the topic: \"{topic}\".\n\n"
    ));
    user.push_str(&format!("Tone: {tone_description}\n"));
    user.push_str(&format!("Length: {}\n\n", length.instruction()));
    user.push_str("Requirements:\n");
    user.push_str(&format!(
        "- Every caption must blend ALL of these tones at once: {tone_list}. \
         Do not write one caption per tone.\n"
    ));
    user.push_str("- Each caption should be unique and creative\n");
    user.push_str(&format!("- Include relevant hashtags about \"{topic}\"\n"));
    user.push_str("- Include emoji\n");
    user.push_str(&format!(
        "- Keep each caption to {}\n",
        length.instruction()
    ));
    user.push_str("- Do not add headings or any text outside the list\n");
    user.push_str("- Format strictly as a numbered list:\n1. ...\n2. ...\n3. ...\n");

    log::debug!(
        "composed prompt ({} chars, {} tone(s), length {})",
        user.len(),
        tones.len(),
        length
    );

    ComposedPrompt {
        system: SYSTEM_PERSONA,
        user,
    }
}

impl CaptionRequest {
    /// Compose the prompt for this request.
    pub fn compose(&self) -> ComposedPrompt {
        compose(self.topic(), self.tones(), self.length())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
