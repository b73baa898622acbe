use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Educational,
    Personal,
    Inspirational,
    Analytical,
    Controversial,
}

impl Tone {
    pub fn label(self) -> &'static str {
        match self {
            Tone::Educational => "educational",
            Tone::Personal => "personal",
            Tone::Inspirational => "inspirational",
            Tone::Analytical => "analytical",
            Tone::Controversial => "controversial",
        }
    }
}

/// Signals derived from a piece of source content. Built fresh for every
/// input and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSignals {
    pub has_personal_story: bool,
    pub has_statistics: bool,
    pub has_quotes: bool,
    pub has_named_people: bool,
    pub has_frameworks: bool,
    pub has_book_references: bool,
    /// Topic labels in group-check order, without duplicates.
    pub main_topics: Vec<String>,
    pub tone: Tone,
}

impl ContentSignals {
    pub fn first_topic(&self) -> Option<&str> {
        self.main_topics.first().map(String::as_str)
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.main_topics.iter().any(|t| t == topic)
    }
}

fn word_group(words: &[&str]) -> Regex {
    let alt = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b({alt})\b")).unwrap()
}

pub(crate) static PERSONAL_RE: Lazy<Regex> = Lazy::new(|| word_group(&["i", "my", "me", "myself"]));

pub(crate) static STATISTICS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d+%|\b\d+\s*(million|billion|thousand|users|customers|dollars)\b").unwrap()
});

pub(crate) static QUOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)"|“([^”]*)”"#).unwrap());

pub(crate) static NAMED_PERSON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+\b").unwrap());

static FRAMEWORK_RE: Lazy<Regex> = Lazy::new(|| {
    word_group(&["framework", "method", "system", "process", "step", "steps", "approach"])
});

static BOOK_RE: Lazy<Regex> = Lazy::new(|| word_group(&["book", "author", "read", "chapter"]));

static TOPIC_GROUPS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        (
            "business",
            word_group(&[
                "business",
                "businesses",
                "startup",
                "startups",
                "entrepreneur",
                "entrepreneurs",
                "company",
                "companies",
            ]),
        ),
        (
            "learning",
            word_group(&[
                "learn",
                "learns",
                "learned",
                "learning",
                "education",
                "study",
                "skill",
                "skills",
                "knowledge",
            ]),
        ),
        (
            "success",
            word_group(&[
                "success",
                "successes",
                "achieve",
                "achieved",
                "achieves",
                "goal",
                "goals",
                "win",
                "wins",
                "winning",
                "accomplish",
                "accomplished",
            ]),
        ),
        (
            "personal",
            word_group(&["life", "personal", "experience", "experiences", "story", "stories"]),
        ),
        (
            "mistakes",
            word_group(&[
                "mistake", "mistakes", "fail", "fails", "failed", "failing", "error", "errors",
                "wrong",
            ]),
        ),
        (
            "advice",
            word_group(&["advice", "tip", "tips", "help", "guide", "guides", "how"]),
        ),
    ]
});

static POSITIVE_RE: Lazy<Regex> = Lazy::new(|| {
    word_group(&[
        "success",
        "great",
        "amazing",
        "wonderful",
        "excellent",
        "best",
        "love",
        "fantastic",
        "awesome",
        "perfect",
    ])
});

static NEGATIVE_RE: Lazy<Regex> = Lazy::new(|| {
    word_group(&[
        "fail", "failure", "mistake", "wrong", "bad", "terrible", "awful", "hate", "worst",
        "problem",
    ])
});

static ANALYTICAL_RE: Lazy<Regex> =
    Lazy::new(|| word_group(&["analysis", "data", "research", "study"]));

static CONTRARIAN_RE: Lazy<Regex> = Lazy::new(|| {
    word_group(&["wrong", "myth", "misconception", "controversial", "unpopular"])
});

/// Derives [`ContentSignals`] from raw text. Never fails; text without any
/// matches yields all-false flags, no topics and an educational tone.
pub fn analyze(text: &str) -> ContentSignals {
    let has_personal_story = PERSONAL_RE.is_match(text);
    let has_statistics = STATISTICS_RE.is_match(text);
    let has_quotes = QUOTE_RE.is_match(text);
    let has_named_people = NAMED_PERSON_RE.is_match(text);
    let has_frameworks = FRAMEWORK_RE.is_match(text);
    let has_book_references = BOOK_RE.is_match(text);

    let mut main_topics: Vec<String> = Vec::new();
    for (label, pattern) in TOPIC_GROUPS.iter() {
        if pattern.is_match(text) && !main_topics.iter().any(|t| t == label) {
            main_topics.push((*label).to_string());
        }
    }

    let tone = resolve_tone(text, has_personal_story);

    ContentSignals {
        has_personal_story,
        has_statistics,
        has_quotes,
        has_named_people,
        has_frameworks,
        has_book_references,
        main_topics,
        tone,
    }
}

fn resolve_tone(text: &str, has_personal_story: bool) -> Tone {
    if has_personal_story {
        return Tone::Personal;
    }

    let positive = POSITIVE_RE.find_iter(text).count();
    let negative = NEGATIVE_RE.find_iter(text).count();
    if positive > negative {
        Tone::Inspirational
    } else if ANALYTICAL_RE.is_match(text) {
        Tone::Analytical
    } else if CONTRARIAN_RE.is_match(text) {
        Tone::Controversial
    } else {
        Tone::Educational
    }
}
