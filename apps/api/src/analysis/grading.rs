use serde::{Deserialize, Serialize};

use crate::analysis::models::{Grade, MetricSet};

/// Blend weights for the four metrics. Sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricWeights {
    pub ats: f64,
    pub impact: f64,
    pub keywords: f64,
    pub brevity: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            ats: 0.20,
            impact: 0.35,
            keywords: 0.25,
            brevity: 0.20,
        }
    }
}

/// Weighted blend of the metric scores, rounded to the nearest integer.
pub fn blend_total(metrics: &MetricSet, weights: &MetricWeights) -> u32 {
    let total = metrics.ats.score as f64 * weights.ats
        + metrics.impact.score as f64 * weights.impact
        + metrics.keywords.score as f64 * weights.keywords
        + metrics.brevity.score as f64 * weights.brevity;
    total.round().clamp(0.0, 100.0) as u32
}

/// Letter grade for a blended score. 50–59 is a D; only scores under 50 fail.
pub fn grade_for(score: u32) -> Grade {
    match score {
        s if s >= 90 => Grade::S,
        s if s >= 80 => Grade::A,
        s if s >= 70 => Grade::B,
        s if s >= 60 => Grade::C,
        s if s >= 50 => Grade::D,
        _ => Grade::F,
    }
}
