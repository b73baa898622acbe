use std::cmp::Ordering;
use std::collections::HashMap;

use crate::scoring::ScoredCandidate;

/// Most members any one category gets before the score-only fill.
pub const CATEGORY_CAP: usize = 2;

#[derive(Debug, Clone)]
pub struct CategoryDiversitySelector {
    category_cap: usize,
}

impl Default for CategoryDiversitySelector {
    fn default() -> Self {
        Self {
            category_cap: CATEGORY_CAP,
        }
    }
}

impl CategoryDiversitySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category_cap(&self) -> usize {
        self.category_cap
    }

    /// Picks up to `limit` candidates, spreading them across categories
    /// before falling back to raw score. Output is ordered by score.
    pub fn select(&self, candidates: &[ScoredCandidate], limit: usize) -> Vec<ScoredCandidate> {
        if limit == 0 || candidates.is_empty() {
            return Vec::new();
        }

        let groups = group_by_category(candidates);
        let mut taken = vec![false; candidates.len()];
        let mut picked: Vec<usize> = Vec::with_capacity(limit.min(candidates.len()));

        for rank in 0..self.category_cap {
            for (_, members) in &groups {
                if picked.len() >= limit {
                    break;
                }
                if let Some(&index) = members.get(rank) {
                    if !taken[index] {
                        taken[index] = true;
                        picked.push(index);
                    }
                }
            }
        }

        if picked.len() < limit {
            let mut rest: Vec<usize> = (0..candidates.len()).filter(|&i| !taken[i]).collect();
            rest.sort_by(|&a, &b| by_score_desc(&candidates[a], &candidates[b]));
            for index in rest {
                if picked.len() >= limit {
                    break;
                }
                taken[index] = true;
                picked.push(index);
            }
        }

        picked.truncate(limit);

        let mut selected: Vec<ScoredCandidate> =
            picked.into_iter().map(|index| candidates[index].clone()).collect();
        selected.sort_by(by_score_desc);
        selected
    }
}

/// Groups indices by category in first-appearance order; members are sorted
/// by score with ties kept in input order.
fn group_by_category(candidates: &[ScoredCandidate]) -> Vec<(&str, Vec<usize>)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();

    for (index, candidate) in candidates.iter().enumerate() {
        let category = candidate.category();
        let slot = *positions.entry(category).or_insert_with(|| {
            groups.push((category, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(index);
    }

    for (_, members) in groups.iter_mut() {
        members.sort_by(|&a, &b| by_score_desc(&candidates[a], &candidates[b]));
    }

    groups
}

fn by_score_desc(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}
