use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::CorpusConfig;

const BUILTIN_TEMPLATES: &str = include_str!("../data/templates.json");
const BUILTIN_POWER_HOOKS: &str = include_str!("../data/power-hooks.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateKind {
    Template,
    PowerHook,
}

impl CandidateKind {
    pub fn label(self) -> &'static str {
        match self {
            CandidateKind::Template => "template",
            CandidateKind::PowerHook => "power-hook",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub kind: CandidateKind,
    pub title: String,
    pub display_text: String,
    pub summary: String,
    pub category: String,
    pub hook_type: Option<String>,
    pub variables: Vec<String>,
}

impl Candidate {
    pub fn template(id: &str, title: &str, summary: &str, text: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: CandidateKind::Template,
            title: title.to_string(),
            display_text: text.to_string(),
            summary: summary.to_string(),
            category: category.to_string(),
            hook_type: None,
            variables: Vec::new(),
        }
    }

    pub fn power_hook(
        id: &str,
        text: &str,
        category: &str,
        hook_type: &str,
        variables: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            kind: CandidateKind::PowerHook,
            title: id.to_string(),
            display_text: text.to_string(),
            summary: String::new(),
            category: category.to_string(),
            hook_type: Some(hook_type.to_string()),
            variables: variables.iter().map(|v| v.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub template: String,
    pub category: String,
}

impl From<TemplateRecord> for Candidate {
    fn from(record: TemplateRecord) -> Self {
        Self {
            id: record.id,
            kind: CandidateKind::Template,
            title: record.title,
            display_text: record.template,
            summary: record.summary,
            category: record.category,
            hook_type: None,
            variables: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerHookRecord {
    pub id: String,
    pub text: String,
    pub category: String,
    #[serde(rename = "type", default)]
    pub hook_type: Option<String>,
    #[serde(default)]
    pub variables: Vec<String>,
}

impl From<PowerHookRecord> for Candidate {
    fn from(record: PowerHookRecord) -> Self {
        let mut variables: Vec<String> = Vec::with_capacity(record.variables.len());
        for name in record.variables {
            if !variables.contains(&name) {
                variables.push(name);
            }
        }
        Self {
            title: record.id.clone(),
            id: record.id,
            kind: CandidateKind::PowerHook,
            display_text: record.text,
            summary: String::new(),
            category: record.category,
            hook_type: record.hook_type,
            variables,
        }
    }
}

/// Read-only set of templates and power hooks, loaded once per process.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    templates: Vec<Candidate>,
    power_hooks: Vec<Candidate>,
}

impl Corpus {
    pub fn new(templates: Vec<Candidate>, power_hooks: Vec<Candidate>) -> Self {
        Self {
            templates,
            power_hooks,
        }
    }

    pub fn builtin() -> Result<Self, String> {
        let templates = parse_templates(BUILTIN_TEMPLATES)
            .map_err(|err| format!("failed to parse bundled templates: {}", err))?;
        let power_hooks = parse_power_hooks(BUILTIN_POWER_HOOKS)
            .map_err(|err| format!("failed to parse bundled power hooks: {}", err))?;
        Ok(Self::new(templates, power_hooks))
    }

    pub fn load(config: &CorpusConfig) -> Result<Self, String> {
        let templates = match read_if_exists(&config.templates_path)? {
            Some(contents) => parse_templates(&contents).map_err(|err| {
                format!("failed to parse {}: {}", config.templates_path.display(), err)
            })?,
            None => {
                tracing::debug!(path = %config.templates_path.display(), "templates file missing, using bundled set");
                parse_templates(BUILTIN_TEMPLATES)
                    .map_err(|err| format!("failed to parse bundled templates: {}", err))?
            }
        };

        let power_hooks = match read_if_exists(&config.power_hooks_path)? {
            Some(contents) => parse_power_hooks(&contents).map_err(|err| {
                format!("failed to parse {}: {}", config.power_hooks_path.display(), err)
            })?,
            None => {
                tracing::debug!(path = %config.power_hooks_path.display(), "power hooks file missing, using bundled set");
                parse_power_hooks(BUILTIN_POWER_HOOKS)
                    .map_err(|err| format!("failed to parse bundled power hooks: {}", err))?
            }
        };

        let corpus = Self::new(templates, power_hooks);
        tracing::info!(
            templates = corpus.templates.len(),
            power_hooks = corpus.power_hooks.len(),
            version = %corpus.version(),
            "loaded candidate corpus"
        );
        Ok(corpus)
    }

    pub fn templates(&self) -> &[Candidate] {
        &self.templates
    }

    pub fn power_hooks(&self) -> &[Candidate] {
        &self.power_hooks
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.power_hooks.is_empty()
    }

    pub fn template_by_id(&self, id: &str) -> Option<&Candidate> {
        self.templates.iter().find(|template| template.id == id)
    }

    pub fn power_hook_by_id(&self, id: &str) -> Option<&Candidate> {
        self.power_hooks.iter().find(|hook| hook.id == id)
    }

    pub fn templates_in_category(&self, category: &str) -> Vec<&Candidate> {
        self.templates
            .iter()
            .filter(|template| template.category == category)
            .collect()
    }

    /// Template categories in first-appearance order.
    pub fn template_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for template in &self.templates {
            if !categories.contains(&template.category.as_str()) {
                categories.push(&template.category);
            }
        }
        categories
    }

    /// Stable fingerprint of the corpus contents.
    pub fn version(&self) -> String {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        for candidate in self.templates.iter().chain(self.power_hooks.iter()) {
            hasher.update(candidate.kind.label().as_bytes());
            hasher.update([0u8]);
            hasher.update(candidate.id.as_bytes());
            hasher.update([0u8]);
            hasher.update(candidate.category.as_bytes());
            hasher.update([0u8]);
            hasher.update(candidate.display_text.as_bytes());
            hasher.update([0xffu8]);
        }
        let digest = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        format!("{:016x}", u64::from_be_bytes(bytes))
    }
}

pub fn parse_templates(contents: &str) -> Result<Vec<Candidate>, String> {
    let records: Vec<TemplateRecord> =
        serde_json::from_str(contents).map_err(|err| err.to_string())?;
    Ok(records.into_iter().map(Candidate::from).collect())
}

pub fn parse_power_hooks(contents: &str) -> Result<Vec<Candidate>, String> {
    let records: Vec<PowerHookRecord> =
        serde_json::from_str(contents).map_err(|err| err.to_string())?;
    Ok(records.into_iter().map(Candidate::from).collect())
}

fn read_if_exists(path: &Path) -> Result<Option<String>, String> {
    if !path.exists() {
        return Ok(None);
    }
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|err| format!("failed to read {}: {}", path.display(), err))
}
