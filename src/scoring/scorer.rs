use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analysis::ContentSignals;
use crate::corpus::{Candidate, CandidateKind};
use crate::placeholders::{extract_placeholder_data, fill_template};
use crate::scoring::jitter::RandomSource;
use crate::scoring::rules::{
    self, Alignment, PhraseGroup, NUMBERED_LIST_RE, NUMBERED_LIST_WEIGHT, PHRASE_GROUPS,
    POWER_HOOK_ALIGNMENTS, TEMPLATE_ALIGNMENTS,
};
use crate::scoring::variables::fill_variables;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    pub template_jitter: f64,
    pub power_hook_jitter: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            template_jitter: 3.0,
            power_hook_jitter: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    /// Sum of every rule that fired, before jitter.
    pub rule_score: f64,
    pub jitter: f64,
    pub score: f64,
    pub reason: String,
    pub variable_data: BTreeMap<String, String>,
    pub filled_text: Option<String>,
}

impl ScoredCandidate {
    pub fn new(candidate: Candidate) -> Self {
        Self {
            candidate,
            rule_score: 0.0,
            jitter: 0.0,
            score: 0.0,
            reason: String::new(),
            variable_data: BTreeMap::new(),
            filled_text: None,
        }
    }

    pub fn category(&self) -> &str {
        &self.candidate.category
    }

    pub fn id(&self) -> &str {
        &self.candidate.id
    }
}

#[derive(Default)]
struct Tally {
    score: f64,
    reasons: Vec<String>,
}

impl Tally {
    fn add(&mut self, weight: f64, reason: impl Into<String>) {
        if weight <= 0.0 {
            return;
        }
        self.score += weight;
        self.reasons.push(reason.into());
    }
}

#[derive(Debug, Clone, Default)]
pub struct CandidateScorer {
    config: ScorerConfig,
}

impl CandidateScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    pub fn jitter_max(&self, kind: CandidateKind) -> f64 {
        let max = match kind {
            CandidateKind::Template => self.config.template_jitter,
            CandidateKind::PowerHook => self.config.power_hook_jitter,
        };
        max.max(0.0)
    }

    pub fn score(
        &self,
        candidate: &Candidate,
        signals: &ContentSignals,
        raw_text: &str,
        rng: &mut dyn RandomSource,
    ) -> ScoredCandidate {
        let mut tally = Tally::default();
        let mut scored = ScoredCandidate::new(candidate.clone());
        let text = candidate.display_text.to_lowercase();

        if candidate.kind == CandidateKind::PowerHook {
            tally.add(
                rules::category_base_score(&candidate.category),
                format!("Category base: {}", candidate.category),
            );
            if let Some(hook_type) = candidate.hook_type.as_deref() {
                tally.add(rules::type_bonus(hook_type), format!("Psychological type: {}", hook_type));
            }

            let fill = fill_variables(&candidate.display_text, &candidate.variables, signals, raw_text);
            for (name, bonus) in &fill.bonuses {
                tally.add(*bonus, format!("Variable filled: {}", name));
            }
            scored.variable_data = fill.data;
            scored.filled_text = Some(fill.filled_text);
        } else {
            let data = extract_placeholder_data(raw_text, &candidate.display_text);
            scored.filled_text = Some(fill_template(&candidate.display_text, &data));
            scored.variable_data = data;
        }

        for group in PHRASE_GROUPS {
            if let Some(phrase) = first_match(group, &text) {
                tally.add(group.weight, group.reason.render(phrase));
            }
        }

        if NUMBERED_LIST_RE.is_match(&candidate.display_text) {
            tally.add(NUMBERED_LIST_WEIGHT, "Numbered list format (high engagement)");
        }

        let alignments: &[Alignment] = match candidate.kind {
            CandidateKind::Template => &TEMPLATE_ALIGNMENTS,
            CandidateKind::PowerHook => &POWER_HOOK_ALIGNMENTS,
        };
        for alignment in alignments {
            if alignment.signal.is_set(signals)
                && alignment.categories.contains(&candidate.category.as_str())
            {
                tally.add(alignment.weight, alignment.reason);
            }
        }

        let summary = candidate.summary.to_lowercase();
        for topic in &signals.main_topics {
            if text.contains(topic.as_str()) || summary.contains(topic.as_str()) {
                tally.add(rules::TOPIC_OVERLAP_WEIGHT, format!("Topic relevance: {}", topic));
            }
        }

        if rules::is_contrarian_tone(signals.tone) {
            match candidate.kind {
                CandidateKind::Template if text.contains("contrarian") => {
                    tally.add(rules::TEMPLATE_CONTRARIAN_WEIGHT, "Matches controversial tone");
                }
                CandidateKind::PowerHook
                    if rules::CONTRARIAN_CATEGORIES.contains(&candidate.category.as_str()) =>
                {
                    tally.add(rules::POWER_HOOK_TONE_WEIGHT, "Matches controversial tone");
                }
                _ => {}
            }
        }

        let jitter = rng.next_f64() * self.jitter_max(candidate.kind);

        scored.rule_score = tally.score;
        scored.jitter = jitter;
        scored.score = tally.score + jitter;
        scored.reason = if tally.reasons.is_empty() {
            "General content match".to_string()
        } else {
            tally.reasons.join(", ")
        };
        scored
    }
}

fn first_match(group: &PhraseGroup, lowercase_text: &str) -> Option<&'static str> {
    group
        .phrases
        .iter()
        .copied()
        .find(|phrase| lowercase_text.contains(&phrase.to_lowercase()))
}
