use serde::{Deserialize, Serialize};

/// Most suggestions surfaced to the user per analysis.
pub const ACTION_PLAN_LIMIT: usize = 3;

/// Letter grade derived from the blended score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    F,
}

/// One named diagnostic dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// 0 – 100
    pub score: u32,
    pub label: String,
    pub details: Vec<String>,
}

impl Metric {
    pub fn new(score: i64, label: &str, details: Vec<String>) -> Self {
        Self {
            score: score.clamp(0, 100) as u32,
            label: label.to_string(),
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSet {
    pub ats: Metric,
    pub impact: Metric,
    pub keywords: Metric,
    pub brevity: Metric,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub total_score: u32,
    pub grade: Grade,
    pub metrics: MetricSet,
    /// At most `ACTION_PLAN_LIMIT` entries, in discovery order.
    pub action_plan: Vec<String>,
}

/// Suggestions in the order the metrics raised them. Never re-sorted.
#[derive(Debug, Default)]
pub struct ActionPlan {
    items: Vec<String>,
}

impl ActionPlan {
    pub fn push(&mut self, item: &str) {
        self.items.push(item.to_string());
    }

    pub fn has_fewer_than(&self, count: usize) -> bool {
        self.items.len() < count
    }

    pub fn into_capped(mut self) -> Vec<String> {
        self.items.truncate(ACTION_PLAN_LIMIT);
        self.items
    }
}
