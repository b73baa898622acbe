use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::analysis::{ContentSignals, NAMED_PERSON_RE, STATISTICS_RE};
use crate::placeholders::fill_first;

static INDUSTRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(technology|tech|software|saas|marketing|finance|fintech|healthcare|education|real estate|ecommerce|e-commerce|retail|crypto|fitness|design|sales|consulting|media|manufacturing|hospitality)\b",
    )
    .unwrap()
});

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());

static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d+\s+(hours?|days?|weeks?|months?|years?)\b").unwrap());

/// A resolved power-hook variable. `bonus` is zero when the value is a fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub value: String,
    pub bonus: f64,
}

impl Resolution {
    fn found(value: impl Into<String>, bonus: f64) -> Self {
        Self {
            value: value.into(),
            bonus,
        }
    }

    fn fallback(value: &str) -> Self {
        Self {
            value: value.to_string(),
            bonus: 0.0,
        }
    }

    pub fn is_from_content(&self) -> bool {
        self.bonus > 0.0
    }
}

pub fn resolve_variable(name: &str, signals: &ContentSignals, raw_text: &str) -> Resolution {
    match name.trim().to_lowercase().as_str() {
        "topic" => match signals.first_topic() {
            Some(topic) => Resolution::found(topic, 15.0),
            None => Resolution::fallback("this"),
        },
        "industry" | "industry/field" | "field" | "field/industry" | "specific field" => {
            match INDUSTRY_RE.find(raw_text) {
                Some(found) => Resolution::found(found.as_str().to_lowercase(), 20.0),
                None => Resolution::fallback("your field"),
            }
        }
        "journey" => match signals.first_topic() {
            Some(topic) if signals.has_personal_story => Resolution::found(topic, 15.0),
            _ => Resolution::fallback("this journey"),
        },
        "number" => match NUMBER_RE.find(raw_text) {
            Some(found) => Resolution::found(found.as_str(), 10.0),
            None => Resolution::fallback("5"),
        },
        "time" | "time period" | "timeframe" => match DURATION_RE.find(raw_text) {
            Some(found) => Resolution::found(found.as_str(), 10.0),
            None => Resolution::fallback("months"),
        },
        "successful person/company" | "expert/mentor" | "person" => {
            match NAMED_PERSON_RE.find(raw_text) {
                Some(found) => Resolution::found(found.as_str(), 8.0),
                None => Resolution::fallback("this"),
            }
        }
        "data/research" | "data" | "research" => match STATISTICS_RE.find(raw_text) {
            Some(found) => Resolution::found(found.as_str(), 5.0),
            None => Resolution::fallback("this"),
        },
        _ => Resolution::fallback("this"),
    }
}

#[derive(Debug, Clone, Default)]
pub struct VariableFill {
    pub data: BTreeMap<String, String>,
    pub filled_text: String,
    /// `(variable, bonus)` for each variable resolved from the content.
    pub bonuses: Vec<(String, f64)>,
}

/// Resolves every declared variable and substitutes it into `text`.
pub fn fill_variables(
    text: &str,
    variables: &[String],
    signals: &ContentSignals,
    raw_text: &str,
) -> VariableFill {
    let mut fill = VariableFill {
        filled_text: text.to_string(),
        ..VariableFill::default()
    };

    for name in variables {
        let resolution = resolve_variable(name, signals, raw_text);
        fill.filled_text = fill_first(&fill.filled_text, name, &resolution.value);
        if resolution.is_from_content() {
            fill.bonuses.push((name.clone(), resolution.bonus));
        }
        fill.data.insert(name.clone(), resolution.value);
    }

    fill
}
