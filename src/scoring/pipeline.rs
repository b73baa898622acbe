use std::cmp::Ordering;

use crate::analysis::ContentSignals;
use crate::corpus::Candidate;
use crate::scoring::{CandidateScorer, CategoryDiversitySelector, RandomSource, ScoredCandidate};

#[derive(Debug, Clone, Default)]
pub struct RankingPipeline {
    scorer: CandidateScorer,
    selector: CategoryDiversitySelector,
}

impl RankingPipeline {
    pub fn new(scorer: CandidateScorer, selector: CategoryDiversitySelector) -> Self {
        Self { scorer, selector }
    }

    /// Scores every candidate, drops the ones no rule matched, and returns
    /// a category-balanced selection of at most `limit` entries.
    pub fn rank(
        &self,
        candidates: &[Candidate],
        signals: &ContentSignals,
        raw_text: &str,
        limit: usize,
        rng: &mut dyn RandomSource,
    ) -> Vec<ScoredCandidate> {
        let scored = self.score_all(candidates, signals, raw_text, rng);
        let selected = self.selector.select(&scored, limit);

        tracing::debug!(
            candidates = candidates.len(),
            matched = scored.len(),
            selected = selected.len(),
            limit,
            "ranked candidates"
        );

        selected
    }

    /// Scored candidates with a positive rule score, highest first.
    pub fn score_all(
        &self,
        candidates: &[Candidate],
        signals: &ContentSignals,
        raw_text: &str,
        rng: &mut dyn RandomSource,
    ) -> Vec<ScoredCandidate> {
        let mut scored: Vec<ScoredCandidate> = candidates
            .iter()
            .map(|candidate| self.scorer.score(candidate, signals, raw_text, rng))
            .filter(|candidate| candidate.rule_score > 0.0)
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored
    }
}
