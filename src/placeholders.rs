use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::analysis::{NAMED_PERSON_RE, QUOTE_RE};

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());

static SUBJECT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(business|marketing|psychology|productivity|leadership|entrepreneurship|technology|design|writing|health|fitness|finance|investing|career|education|creativity|communication|sales|management|strategy)\b",
    )
    .unwrap()
});

/// Placeholder names in order of first appearance.
pub fn extract_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for capture in PLACEHOLDER_RE.captures_iter(text) {
        let name = &capture[1];
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Replaces the first literal `[name]` in `text`.
pub fn fill_first(text: &str, name: &str, value: &str) -> String {
    let token = format!("[{}]", name);
    text.replacen(&token, value, 1)
}

/// Best-effort values for a template's placeholders. Placeholders nothing
/// can be found for keep their bracketed form.
pub fn extract_placeholder_data(content: &str, template: &str) -> BTreeMap<String, String> {
    let mut data = BTreeMap::new();

    for placeholder in extract_placeholders(template) {
        let lower = placeholder.to_lowercase();

        let value = if lower.contains("name") || lower.contains("author") {
            NAMED_PERSON_RE.find(content).map(|m| m.as_str().to_string())
        } else if lower.contains('x') || lower.contains("stat") || lower.contains("number") {
            NUMBER_RE.find(content).map(|m| m.as_str().to_string())
        } else if lower.contains("topic") || lower.contains("skill") || lower.contains("niche") {
            SUBJECT_RE.find(content).map(|m| m.as_str().to_lowercase())
        } else if lower.contains("quote") {
            QUOTE_RE.captures(content).and_then(|capture| {
                capture
                    .get(1)
                    .or_else(|| capture.get(2))
                    .map(|m| m.as_str().to_string())
            })
        } else {
            None
        };

        let value = value
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| format!("[{}]", placeholder));
        data.insert(placeholder, value);
    }

    data
}

/// Replaces every occurrence of each `[name]` with its value.
pub fn fill_template(template: &str, data: &BTreeMap<String, String>) -> String {
    let mut result = template.to_string();
    for (placeholder, value) in data {
        result = result.replace(&format!("[{}]", placeholder), value);
    }
    result
}
