use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use hook_ranker::config::RankerConfig;
use hook_ranker::scoring::ScoredCandidate;
use hook_ranker::{Candidate, ContentSignals, Limits, RankingOutput};

#[derive(Debug, Deserialize)]
pub struct ApiAnalyzeRequest {
    pub content: Option<String>,
}

impl ApiAnalyzeRequest {
    pub fn into_content(self, config: &RankerConfig) -> Result<String, String> {
        config.input.validate(&self.content.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiRankRequest {
    pub content: Option<String>,
    pub request_id: Option<String>,
    pub template_limit: Option<usize>,
    pub power_hook_limit: Option<usize>,
    pub seed: Option<u64>,
}

impl ApiRankRequest {
    pub fn content(&self, config: &RankerConfig) -> Result<String, String> {
        config
            .input
            .validate(self.content.as_deref().unwrap_or_default())
    }

    pub fn limits(&self, config: &RankerConfig) -> Limits {
        let mut limits = Limits::from_config(config);
        if let Some(value) = self.template_limit {
            limits.templates = value;
        }
        if let Some(value) = self.power_hook_limit {
            limits.power_hooks = value;
        }
        limits
    }
}

#[derive(Debug, Serialize)]
pub struct ApiCandidate {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub category: String,
    pub text: String,
    pub score: f64,
    pub reason: String,
    pub variable_data: BTreeMap<String, String>,
    pub filled_text: Option<String>,
}

impl From<ScoredCandidate> for ApiCandidate {
    fn from(scored: ScoredCandidate) -> Self {
        Self {
            id: scored.candidate.id,
            kind: scored.candidate.kind.label().to_string(),
            title: scored.candidate.title,
            category: scored.candidate.category,
            text: scored.candidate.display_text,
            score: scored.score,
            reason: scored.reason,
            variable_data: scored.variable_data,
            filled_text: scored.filled_text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiRankResponse {
    pub request_id: String,
    pub corpus_version: String,
    pub analysis: ContentSignals,
    pub templates: Vec<ApiCandidate>,
    pub power_hooks: Vec<ApiCandidate>,
    pub warnings: Vec<String>,
}

impl ApiRankResponse {
    pub fn from_output(output: RankingOutput, request_id: String) -> Self {
        let mut warnings = Vec::new();
        if output.templates.is_empty() {
            warnings.push("No suitable templates found for this content".to_string());
        }
        if output.power_hooks.is_empty() {
            warnings.push("No power hooks available".to_string());
        }

        Self {
            request_id,
            corpus_version: output.corpus_version,
            analysis: output.analysis,
            templates: output.templates.into_iter().map(ApiCandidate::from).collect(),
            power_hooks: output.power_hooks.into_iter().map(ApiCandidate::from).collect(),
            warnings,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiTemplate {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub template: String,
}

impl From<&Candidate> for ApiTemplate {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id.clone(),
            title: candidate.title.clone(),
            summary: candidate.summary.clone(),
            category: candidate.category.clone(),
            template: candidate.display_text.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiPowerHook {
    pub id: String,
    pub text: String,
    pub category: String,
    #[serde(rename = "type")]
    pub hook_type: Option<String>,
    pub variables: Vec<String>,
}

impl From<&Candidate> for ApiPowerHook {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id.clone(),
            text: candidate.display_text.clone(),
            category: candidate.category.clone(),
            hook_type: candidate.hook_type.clone(),
            variables: candidate.variables.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    pub category: Option<String>,
}
