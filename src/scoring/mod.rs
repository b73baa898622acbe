pub mod diversity;
pub mod jitter;
pub mod pipeline;
pub mod rules;
pub mod scorer;
pub mod variables;

pub use diversity::{CategoryDiversitySelector, CATEGORY_CAP};
pub use jitter::{FixedJitter, RandomSource, SeededJitter, ThreadJitter};
pub use pipeline::RankingPipeline;
pub use scorer::{CandidateScorer, ScoredCandidate, ScorerConfig};
pub use variables::{fill_variables, resolve_variable, Resolution, VariableFill};
