//! Heuristic tables: the word lists and patterns the analyzer scores against.
//!
//! The defaults are the built-in tuning. A JSON file with the same shape can
//! replace them at startup (`ANALYZER_TABLES_PATH`) without touching scoring code.

use regex::{Regex, RegexSet, RegexSetBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Heuristic table '{0}' is empty")]
    EmptyTable(&'static str),

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// What a quantifier pattern detects in a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantifierKind {
    Percentage,
    Currency,
    Multiplier,
    Audience,
    Thousands,
    Millions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantifierRule {
    pub kind: QuantifierKind,
    pub pattern: String,
}

impl QuantifierRule {
    fn new(kind: QuantifierKind, pattern: &str) -> Self {
        Self {
            kind,
            pattern: pattern.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeuristicTables {
    /// Verbs that count as a strong opener when a bullet starts with them.
    pub strong_verbs: Vec<String>,
    pub quantifiers: Vec<QuantifierRule>,
}

const DEFAULT_STRONG_VERBS: &[&str] = &[
    "spearheaded",
    "orchestrated",
    "architected",
    "developed",
    "managed",
    "led",
    "designed",
    "implemented",
    "increased",
    "reduced",
    "saved",
    "achieved",
    "launched",
    "generated",
    "optimized",
    "transformed",
];

impl Default for HeuristicTables {
    fn default() -> Self {
        Self {
            strong_verbs: DEFAULT_STRONG_VERBS.iter().map(|v| v.to_string()).collect(),
            quantifiers: vec![
                QuantifierRule::new(QuantifierKind::Percentage, r"\d+%"),
                QuantifierRule::new(QuantifierKind::Currency, r"\$\d+"),
                QuantifierRule::new(QuantifierKind::Multiplier, r"\d+x"),
                QuantifierRule::new(QuantifierKind::Audience, r"\d+ users"),
                QuantifierRule::new(QuantifierKind::Thousands, r"\d+k"),
                QuantifierRule::new(QuantifierKind::Millions, r"\d+m"),
            ],
        }
    }
}

impl HeuristicTables {
    /// Builds the matchers. Verbs are matched literally, case-insensitively,
    /// anchored at the start of the bullet.
    pub fn compile(&self) -> Result<CompiledHeuristics, AnalyzerError> {
        let verbs: Vec<String> = self
            .strong_verbs
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(regex::escape)
            .collect();
        if verbs.is_empty() {
            return Err(AnalyzerError::EmptyTable("strongVerbs"));
        }
        if self.quantifiers.is_empty() {
            return Err(AnalyzerError::EmptyTable("quantifiers"));
        }

        let verb_pattern = format!("(?i)^(?:{})", verbs.join("|"));
        let strong_opener =
            Regex::new(&verb_pattern).map_err(|source| AnalyzerError::InvalidPattern {
                pattern: verb_pattern.clone(),
                source,
            })?;

        // Validate one by one so the error names the offending pattern.
        for rule in &self.quantifiers {
            Regex::new(&rule.pattern).map_err(|source| AnalyzerError::InvalidPattern {
                pattern: rule.pattern.clone(),
                source,
            })?;
        }
        let quantifiers = RegexSetBuilder::new(self.quantifiers.iter().map(|r| &r.pattern))
            .case_insensitive(true)
            .build()
            .map_err(|source| AnalyzerError::InvalidPattern {
                pattern: "<quantifier set>".to_string(),
                source,
            })?;

        Ok(CompiledHeuristics {
            strong_opener,
            quantifiers,
        })
    }
}

/// Matchers ready for use. Built once per analyzer.
#[derive(Debug, Clone)]
pub struct CompiledHeuristics {
    strong_opener: Regex,
    quantifiers: RegexSet,
}

impl CompiledHeuristics {
    pub fn opens_with_strong_verb(&self, bullet: &str) -> bool {
        self.strong_opener.is_match(bullet)
    }

    pub fn is_quantified(&self, bullet: &str) -> bool {
        self.quantifiers.is_match(bullet)
    }
}
