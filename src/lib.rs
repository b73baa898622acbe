pub mod analysis;
pub mod config;
pub mod corpus;
pub mod placeholders;
pub mod scoring;

use serde::Serialize;

pub use crate::analysis::{analyze, ContentSignals, Tone};
pub use crate::corpus::{Candidate, CandidateKind, Corpus};

use crate::config::RankerConfig;
use crate::scoring::{
    CandidateScorer, CategoryDiversitySelector, RandomSource, RankingPipeline, ScoredCandidate,
    SeededJitter, ThreadJitter,
};

#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub templates: usize,
    pub power_hooks: usize,
}

impl Limits {
    pub fn from_config(config: &RankerConfig) -> Self {
        Self {
            templates: config.selection.template_limit,
            power_hooks: config.selection.power_hook_limit,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingOutput {
    pub analysis: ContentSignals,
    pub templates: Vec<ScoredCandidate>,
    pub power_hooks: Vec<ScoredCandidate>,
    pub corpus_version: String,
}

impl RankingOutput {
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.power_hooks.is_empty()
    }
}

pub fn build_pipeline(config: &RankerConfig) -> RankingPipeline {
    RankingPipeline::new(
        CandidateScorer::new(config.jitter.scorer_config()),
        CategoryDiversitySelector::new(),
    )
}

/// Random source for a request: an explicit seed wins over the configured
/// one; with neither, jitter comes from the thread RNG.
pub fn jitter_source(config: &RankerConfig, seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed.or(config.jitter.seed) {
        Some(seed) => Box::new(SeededJitter::new(seed)),
        None => Box::new(ThreadJitter),
    }
}

pub fn rank_content(
    text: &str,
    corpus: &Corpus,
    config: &RankerConfig,
    rng: &mut dyn RandomSource,
) -> RankingOutput {
    rank_content_with_limits(text, corpus, config, Limits::from_config(config), rng)
}

pub fn rank_content_with_limits(
    text: &str,
    corpus: &Corpus,
    config: &RankerConfig,
    limits: Limits,
    rng: &mut dyn RandomSource,
) -> RankingOutput {
    let analysis = analyze(text);
    let pipeline = build_pipeline(config);

    let templates = pipeline.rank(corpus.templates(), &analysis, text, limits.templates, rng);
    let power_hooks =
        pipeline.rank(corpus.power_hooks(), &analysis, text, limits.power_hooks, rng);

    tracing::info!(
        tone = analysis.tone.label(),
        topics = ?analysis.main_topics,
        templates = templates.len(),
        power_hooks = power_hooks.len(),
        "ranked content"
    );

    RankingOutput {
        analysis,
        templates,
        power_hooks,
        corpus_version: corpus.version(),
    }
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}

pub fn format_flag(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// First line of a multi-line candidate text, shortened to `max_chars`.
pub fn preview(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    let trimmed = first_line.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let mut shortened: String = trimmed.chars().take(max_chars.saturating_sub(3)).collect();
    shortened.push_str("...");
    shortened
}
