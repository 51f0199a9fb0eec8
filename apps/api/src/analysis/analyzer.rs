//! ResumeAnalyzer: deterministic quality assessment of a resume document.
//!
//! Four independent metrics are computed in a fixed order (ATS, impact,
//! keywords, brevity). The order matters: impact, keywords and brevity append
//! to one shared action plan, which is truncated to its first entries rather
//! than sorted by severity.

use crate::analysis::ats::score_ats;
use crate::analysis::brevity::score_brevity;
use crate::analysis::grading::{blend_total, grade_for, MetricWeights};
use crate::analysis::heuristics::{AnalyzerError, CompiledHeuristics, HeuristicTables};
use crate::analysis::impact::score_impact;
use crate::analysis::keywords::score_keywords;
use crate::analysis::models::{ActionPlan, AnalysisResult, MetricSet};
use crate::models::resume::ResumeDocument;

/// Holds the compiled heuristics; cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ResumeAnalyzer {
    heuristics: CompiledHeuristics,
    weights: MetricWeights,
}

impl ResumeAnalyzer {
    pub fn new(tables: &HeuristicTables) -> Result<Self, AnalyzerError> {
        Ok(Self {
            heuristics: tables.compile()?,
            weights: MetricWeights::default(),
        })
    }

    /// Analyzer over the built-in tables.
    pub fn with_default_tables() -> Self {
        Self::new(&HeuristicTables::default()).expect("built-in heuristic tables compile")
    }

    /// Never fails: empty documents produce low scores with explanatory details.
    pub fn analyze(&self, doc: &ResumeDocument) -> AnalysisResult {
        let mut plan = ActionPlan::default();

        let ats = score_ats(doc);
        let impact = score_impact(doc, &self.heuristics, &mut plan);
        let keywords = score_keywords(doc, &mut plan);
        let brevity = score_brevity(doc, &mut plan);

        let metrics = MetricSet {
            ats,
            impact,
            keywords,
            brevity,
        };
        let total_score = blend_total(&metrics, &self.weights);

        AnalysisResult {
            total_score,
            grade: grade_for(total_score),
            metrics,
            action_plan: plan.into_capped(),
        }
    }
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::with_default_tables()
    }
}
