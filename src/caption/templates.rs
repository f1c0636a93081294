//! Canned caption templates used when the completion API is bypassed.
//!
//! Recognized tone combinations live in a static lookup table ([`PATTERNS`]),
//! checked in priority order; a pattern matches when every tone in its key is
//! among the request's tones.  Requests that match nothing use [`BLEND`]
//! (more than two tones) or [`PAIRWISE`] (one or two tones).
//!
//! Output is a pure function of `(topic, tones, length)`.

use crate::caption::prompt::describe_tones;
use crate::caption::request::Length;

// ---------------------------------------------------------------------------
// ToneTemplate
// ---------------------------------------------------------------------------

/// Three caption bodies per length.  `{topic}` and `{blend}` are substituted
/// at render time; hashtags are appended to every line.
#[derive(Debug)]
pub struct ToneTemplate {
    pub name: &'static str,
    /// Sorted, lowercase tone labels.  Empty for the generic descriptors.
    pub key: &'static [&'static str],
    short: Option<[&'static str; 3]>,
    medium: [&'static str; 3],
    long: Option<[&'static str; 3]>,
}

impl ToneTemplate {
    /// Caption bodies for `length`, or the medium bodies when that length
    /// has no dedicated variant.
    pub fn body(&self, length: Length) -> &[&'static str; 3] {
        let variant = match length {
            Length::Short => self.short.as_ref(),
            Length::Medium => None,
            Length::Long => self.long.as_ref(),
        };
        variant.unwrap_or(&self.medium)
    }

    fn matches(&self, tones: &[String]) -> bool {
        !self.key.is_empty() && self.key.iter().all(|k| tones.iter().any(|t| t.as_str() == *k))
    }
}

// ---------------------------------------------------------------------------
// Static template table
// ---------------------------------------------------------------------------

/// Recognized tone combinations, highest priority first.
pub static PATTERNS: &[ToneTemplate] = &[
    ToneTemplate {
        name: "funny-romantic",
        key: &["funny", "romantic"],
        short: Some([
            "{topic} and you: my favorite love story, plot twists included 😂❤️",
            "Roses are red, {topic} is a treat, you laughed at my jokes so now life is complete 🌹😆",
            "Falling for {topic} the way I fall for bad puns: hard and with zero regrets 💘🤣",
        ]),
        medium: [
            "They say love is patient, but nobody was patient waiting for {topic} 😂❤️ Some romances start with a glance. Ours started with {topic} and a very awkward laugh.",
            "Me and {topic}: a rom-com nobody asked for but everybody needs 🎬💕 Butterflies in my stomach, or maybe that's just the third helping. Either way, I'm smitten.",
            "Swipe right on {topic}, the only date that never cancels 😆💘 It listens to my jokes and somehow makes my heart skip. Cupid clearly has a sense of humor.",
        ],
        long: Some([
            "Once upon a time I met {topic} and my heart did a clumsy little dance 💃❤️ I tried to play it cool. I failed spectacularly. Somewhere between nervous giggles and starry eyes, I realized this was the real thing. Now every day feels like a rom-com blooper reel, and honestly I wouldn't cut a single scene 🎬😂",
            "Dear {topic}, you had me at hello and kept me at that ridiculous joke 😆💌 We've shared sunsets and snorts of laughter. We've survived my terrible singing. You still show up looking perfect every time. If this isn't love, I don't know what is, and I'm too busy smiling to check 💕",
            "Plot twist: the love of my life turned out to be {topic} 🤭❤️ No candlelit dinner required. Just good vibes, loud laughs and a little bit of chaos. My friends think I'm dramatic. They're right, and I've never been happier about it 🌹😂",
        ]),
    },
    ToneTemplate {
        name: "adventurous-chill",
        key: &["adventurous", "chill"],
        short: Some([
            "Chasing {topic}, then taking it easy 🏔️🌊",
            "Bold plans, slow pace: {topic} mode on 🧭😌",
            "Explore hard, unwind harder with {topic} 🌄☕",
        ]),
        medium: [
            "Out here finding {topic} off the beaten path 🗺️🌿 No rush, no schedule, just the next horizon. Adventure tastes better when you take it slow.",
            "{topic}: where the trail gets wild and the mood stays mellow 🥾😌 We climbed, we wandered, we napped in the sun. Perfect balance achieved.",
            "Left the map at home and found {topic} anyway 🧭🌅 Every detour was worth it. Now it's hammock time and good tunes.",
        ],
        long: Some([
            "Packed light, wandered far and stumbled into {topic} 🎒🌄 The road was rough in places and gorgeous in all of them. We took the long way because the long way had better views. At the top, nobody was in a hurry to leave. Just deep breaths, warm light and the quiet hum of a day well spent 🌿😌",
            "Some days call for big leaps, others for lazy afternoons, and {topic} gave me both 🪂🛶 Morning was all adrenaline and new trails. Afternoon melted into golden hour by the water. No alarms, no deadlines. I'd do it all again tomorrow, slowly 🌅",
            "{topic} reminded me that adventure doesn't need to be loud 🏕️✨ We followed a path we'd never tried. We stopped whenever something looked beautiful, which was often. The campfire crackled and the stars showed off. Wild heart, calm mind, full camera roll 📸😌",
        ]),
    },
    ToneTemplate {
        name: "funny-professional",
        key: &["funny", "professional"],
        short: Some([
            "{topic}: handled with excellence and at least one dad joke 💼😄",
            "Quarterly goal: more {topic}, fewer meetings about {topic} 📈😂",
            "Serious about {topic}. Not serious about my coffee mug 💼☕",
        ]),
        medium: [
            "Leveling up our {topic} game 📊😎 Strategy, execution and a dash of office humor. KPIs met, puns delivered.",
            "Per my last email, {topic} is awesome 📧😂 We've aligned the stakeholders and synergized the snacks. Let's circle back after lunch.",
            "Professional by day, hilarious by coffee break ☕💼 Today's agenda: crushing {topic} and pretending the printer works. Results speak louder than jokes, but we brought both.",
        ],
        long: Some([
            "Big news from the team: {topic} is officially on the roadmap 🚀💼 We ran the numbers. We ran them again because someone forgot a decimal. The slides are polished, the plan is solid and the coffee is strong. Stakeholders are thrilled and the intern is still laughing at the meeting title. Onward and upward 📈😂",
            "Let's talk {topic}, the professional way, with a wink 😉📊 We set clear goals and met them ahead of schedule. We also set the office record for puns per minute. Turns out good work and good laughs make a great team. Hiring managers, take note. We'll be in the break room celebrating 🎉",
            "Mission statement: deliver outstanding {topic} without losing our sense of humor 💼😆 Our process is rigorous. Our spreadsheets are color-coded. Our jokes are questionable but well intentioned. Clients love the results and tolerate the puns. That's what we call a win-win 🏆",
        ]),
    },
];

/// Generic blend for more than two tones with no recognized pattern.
pub static BLEND: ToneTemplate = ToneTemplate {
    name: "blend",
    key: &[],
    short: Some([
        "{topic}, {blend} ✨🎨",
        "All the feels in one post: {topic} 🌈💫",
        "{topic} with a little bit of everything 🎭✨",
    ]),
    medium: [
        "Mixing every mood into one moment: {topic} 🌈✨ Today it's {blend}. Somehow it all just works.",
        "{topic}, but make it layered 🎨💫 A bit of this, a bit of that, {blend}. The result? Pure magic.",
        "Can't pick one vibe for {topic}, so here's all of them 🎭🌟 It's {blend}. Perfectly balanced, as all things should be.",
    ],
    long: Some([
        "Some moments refuse to fit in one box, and {topic} is one of them 🌈✨ It's {blend}. It started one way and ended somewhere completely different. Every turn added a new shade to the story. By the end, it felt like a playlist on shuffle that somehow made perfect sense 🎶💫",
        "Here's to {topic}, the moment that carried every mood at once 🎨🌟 We felt it all: {blend}. Nothing was planned and everything fit. We laughed, we paused, we soaked it in. Memories like this are made of many colors 🌈",
        "If {topic} were a painting, it'd use the whole palette 🖌️✨ The vibe was {blend}. Each layer made the next one brighter. Nobody wanted it to end. Saving this one for the highlight reel 🎞️💫",
    ]),
};

/// Generic single-tone or pairwise template.
pub static PAIRWISE: ToneTemplate = ToneTemplate {
    name: "pairwise",
    key: &[],
    short: Some([
        "{topic}, {blend} vibes only ✨",
        "Feeling {blend} about {topic} today 💫",
        "{topic} hits different when it's {blend} 🌟",
    ]),
    medium: [
        "Channeling {blend} energy into {topic} ✨ It's all about the mood today. Here's to moments that feel just right.",
        "{topic}, served with a {blend} twist 💫 Simple, honest and exactly what the day needed. Save this for later.",
        "Today's mood: {blend}, and {topic} is the whole story 🌟 Every detail fits the vibe. Tag someone who gets it.",
    ],
    long: Some([
        "Let's talk about {topic} ✨ The mood today is {blend}, and it shows in every little detail. It started as an ordinary day. Then {topic} happened and everything clicked into place. Moments like this deserve to be remembered. So here it is, shared with you 💫",
        "{topic} has been on my mind all week 🌟 I wanted to capture it with a {blend} feel. No filters could do it justice. It's the kind of thing you have to experience yourself. Until then, this post will have to do. Let me know what you think 💬",
        "A little story about {topic} 📖✨ It came with a {blend} spirit from start to finish. Every step felt intentional. Every pause felt earned. By the end, it had become one of my favorite memories. Here's to more days like this one 🌟",
    ]),
};

// ---------------------------------------------------------------------------
// Selection & rendering
// ---------------------------------------------------------------------------

fn lowered(tones: &[String]) -> Vec<String> {
    tones
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Pick the template for `tones` (case-insensitive).
pub fn select_template(tones: &[String]) -> &'static ToneTemplate {
    let tones = lowered(tones);
    match PATTERNS.iter().find(|pattern| pattern.matches(&tones)) {
        Some(pattern) => pattern,
        None if tones.len() > 2 => &BLEND,
        None => &PAIRWISE,
    }
}

/// `#` plus the lowercase tone with whitespace removed.
pub fn tone_hashtag(tone: &str) -> String {
    let compact: String = tone
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    format!("#{compact}")
}

fn topic_hashtag(topic: &str) -> Option<String> {
    let compact: String = topic
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    (!compact.is_empty()).then(|| format!("#{compact}"))
}

fn hashtags(topic: &str, tones: &[String]) -> String {
    let mut tags: Vec<String> = Vec::with_capacity(tones.len() + 1);
    for tag in topic_hashtag(topic)
        .into_iter()
        .chain(tones.iter().map(|t| tone_hashtag(t)))
    {
        if tag.len() > 1 && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags.join(" ")
}

/// Substitute `{topic}` and `{blend}` in one pass so inserted text is never
/// re-scanned.
fn render(body: &str, topic: &str, blend: &str) -> String {
    let mut out = String::with_capacity(body.len() + topic.len() * 2 + blend.len());
    let mut rest = body;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{topic}") {
            out.push_str(topic);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{blend}") {
            out.push_str(blend);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Produce three numbered captions without calling any external service.
///
/// ```
/// use caption_studio::caption::{generate_mock, Length};
///
/// let tones = vec!["funny".to_string(), "romantic".to_string()];
/// let text = generate_mock("coffee", &tones, Length::Short);
/// assert_eq!(text.lines().count(), 3);
/// assert!(text.lines().all(|l| l.contains("coffee") && l.contains('#')));
/// ```
pub fn generate_mock(topic: &str, tones: &[String], length: Length) -> String {
    let topic = topic.trim().replace(['\r', '\n'], " ");
    let tones = lowered(tones);
    let template = select_template(&tones);
    let blend = describe_tones(&tones);
    let tags = hashtags(&topic, &tones);

    log::debug!(
        "mock captions: template '{}', {} tone(s), length {}",
        template.name,
        tones.len(),
        length
    );

    template
        .body(length)
        .iter()
        .enumerate()
        .map(|(i, body)| format!("{}. {} {}", i + 1, render(body, &topic, &blend), tags))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
