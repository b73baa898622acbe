//! Tuned rule tables for candidate scoring. The phrase lists, weights and
//! lookup tables are product constants; change them deliberately.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::{ContentSignals, Tone};

pub struct PhraseGroup {
    pub weight: f64,
    pub phrases: &'static [&'static str],
    pub reason: PhraseReason,
}

#[derive(Clone, Copy)]
pub enum PhraseReason {
    /// Reason names the phrase that matched.
    Quoted(&'static str),
    Fixed(&'static str),
}

impl PhraseReason {
    pub fn render(self, phrase: &str) -> String {
        match self {
            PhraseReason::Quoted(prefix) => format!("{}: \"{}\"", prefix, phrase),
            PhraseReason::Fixed(text) => text.to_string(),
        }
    }
}

pub const STRONG_OPENERS: PhraseGroup = PhraseGroup {
    weight: 40.0,
    phrases: &[
        "I spent over",
        "The most",
        "Here are",
        "Everyone thinks",
        "Most people",
        "I asked",
        "The secret",
        "How to",
        "Why",
        "What most people don't know",
        "The biggest mistake",
        "I used to think",
        "Unpopular opinion",
        "Controversial",
    ],
    reason: PhraseReason::Quoted("Strong hook pattern"),
};

pub const CURIOSITY_TRIGGERS: PhraseGroup = PhraseGroup {
    weight: 35.0,
    phrases: &[
        "secret",
        "hidden",
        "nobody tells you",
        "what I learned",
        "behind the scenes",
        "the real reason",
        "what actually",
        "truth about",
        "what happens when",
    ],
    reason: PhraseReason::Fixed("Creates curiosity gap"),
};

pub const AUTHORITY_PATTERNS: PhraseGroup = PhraseGroup {
    weight: 30.0,
    phrases: &[
        "legendary",
        "successful",
        "expert",
        "master",
        "godfather",
        "king",
        "best",
        "highest-paid",
        "most valuable",
        "world's most",
        "top",
        "greatest",
    ],
    reason: PhraseReason::Fixed("Leverages authority/social proof"),
};

pub const TRANSFORMATION_WORDS: PhraseGroup = PhraseGroup {
    weight: 20.0,
    phrases: &[
        "used to",
        "now I",
        "changed my",
        "went from",
        "transformation",
        "journey",
    ],
    reason: PhraseReason::Fixed("Personal transformation angle"),
};

pub const PROBLEM_SOLUTION_WORDS: PhraseGroup = PhraseGroup {
    weight: 15.0,
    phrases: &["mistake", "problem", "struggle", "failing", "wrong", "fix", "solve"],
    reason: PhraseReason::Fixed("Problem/solution dynamic"),
};

/// Evaluated in this order; each group contributes at most once.
pub const PHRASE_GROUPS: [&PhraseGroup; 5] = [
    &STRONG_OPENERS,
    &CURIOSITY_TRIGGERS,
    &AUTHORITY_PATTERNS,
    &TRANSFORMATION_WORDS,
    &PROBLEM_SOLUTION_WORDS,
];

pub const NUMBERED_LIST_WEIGHT: f64 = 25.0;

pub static NUMBERED_LIST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[X\]|\[\d+\]").unwrap());

pub const TOPIC_OVERLAP_WEIGHT: f64 = 8.0;

pub const TEMPLATE_CONTRARIAN_WEIGHT: f64 = 25.0;

pub const POWER_HOOK_TONE_WEIGHT: f64 = 30.0;

pub const CONTRARIAN_CATEGORIES: [&str; 3] = ["Controversial", "Harsh Truth", "Myth Busting"];

#[derive(Clone, Copy)]
pub enum Signal {
    PersonalStory,
    Statistics,
    Quotes,
    NamedPeople,
    Frameworks,
    BookReferences,
}

impl Signal {
    pub fn is_set(self, signals: &ContentSignals) -> bool {
        match self {
            Signal::PersonalStory => signals.has_personal_story,
            Signal::Statistics => signals.has_statistics,
            Signal::Quotes => signals.has_quotes,
            Signal::NamedPeople => signals.has_named_people,
            Signal::Frameworks => signals.has_frameworks,
            Signal::BookReferences => signals.has_book_references,
        }
    }
}

pub struct Alignment {
    pub signal: Signal,
    pub categories: &'static [&'static str],
    pub weight: f64,
    pub reason: &'static str,
}

pub const TEMPLATE_ALIGNMENTS: [Alignment; 5] = [
    Alignment {
        signal: Signal::PersonalStory,
        categories: &["Personal Story"],
        weight: 15.0,
        reason: "Matches personal story content",
    },
    Alignment {
        signal: Signal::Statistics,
        categories: &["Educational Breakdown", "Insight & Prediction"],
        weight: 12.0,
        reason: "Matches data-driven content",
    },
    Alignment {
        signal: Signal::NamedPeople,
        categories: &["Social Proof / Spotlight", "Curation"],
        weight: 15.0,
        reason: "Matches people-focused content",
    },
    Alignment {
        signal: Signal::BookReferences,
        categories: &["Book-Based"],
        weight: 20.0,
        reason: "Perfect for book content",
    },
    Alignment {
        signal: Signal::Frameworks,
        categories: &["Educational Breakdown"],
        weight: 15.0,
        reason: "Matches framework content",
    },
];

pub const POWER_HOOK_ALIGNMENTS: [Alignment; 7] = [
    Alignment {
        signal: Signal::PersonalStory,
        categories: &["Personal Story"],
        weight: 20.0,
        reason: "Matches personal story content",
    },
    Alignment {
        signal: Signal::PersonalStory,
        categories: &["Transformation"],
        weight: 12.0,
        reason: "Personal content suits a transformation hook",
    },
    Alignment {
        signal: Signal::Statistics,
        categories: &["Data & Research"],
        weight: 18.0,
        reason: "Matches data-driven content",
    },
    Alignment {
        signal: Signal::Frameworks,
        categories: &["Framework"],
        weight: 15.0,
        reason: "Matches framework content",
    },
    Alignment {
        signal: Signal::NamedPeople,
        categories: &["Curiosity"],
        weight: 10.0,
        reason: "Mentions specific people",
    },
    Alignment {
        signal: Signal::BookReferences,
        categories: &["Insight"],
        weight: 10.0,
        reason: "Draws on book content",
    },
    Alignment {
        signal: Signal::Quotes,
        categories: &["Insight"],
        weight: 8.0,
        reason: "Builds on quoted material",
    },
];

pub const DEFAULT_CATEGORY_BASE: f64 = 60.0;

pub fn category_base_score(category: &str) -> f64 {
    match category {
        "Controversial" => 90.0,
        "Harsh Truth" => 88.0,
        "Myth Busting" => 85.0,
        "Curiosity" => 80.0,
        "Warning" => 78.0,
        "Personal Story" => 75.0,
        "Transformation" => 72.0,
        "Data & Research" => 70.0,
        "Framework" => 65.0,
        "Insight" => 60.0,
        _ => DEFAULT_CATEGORY_BASE,
    }
}

pub fn type_bonus(hook_type: &str) -> f64 {
    match hook_type.to_lowercase().as_str() {
        "confrontational" => 30.0,
        "provocative" => 27.0,
        "contrarian" => 25.0,
        "urgent" => 22.0,
        "curiosity" => 20.0,
        "authoritative" => 18.0,
        "relatable" => 17.0,
        "revealing" => 15.0,
        "transformative" => 15.0,
        _ => 0.0,
    }
}

pub fn is_contrarian_tone(tone: Tone) -> bool {
    matches!(tone, Tone::Controversial)
}
