use crate::analysis::models::{ActionPlan, Metric};
use crate::models::resume::ResumeDocument;

pub const LABEL: &str = "Brevity";

const SUMMARY_MIN_WORDS: usize = 30;
const SUMMARY_MAX_WORDS: usize = 100;
const SUMMARY_PENALTY: i64 = 20;
/// Bullets above this wrap past two lines.
const LONG_BULLET_WORDS: usize = 40;
const SHORT_BULLET_WORDS: usize = 5;
const BULLET_PENALTY: i64 = 5;

pub const SHORTEN_SUMMARY_ACTION: &str = "Shorten your professional summary to be more punchy.";
pub const SPLIT_BULLETS_ACTION: &str = "Split long bullet points to improve readability.";

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Readability: starts at 100 and loses points for an out-of-range summary and
/// for every overlong or underweight bullet. Floored at 0.
pub fn score_brevity(doc: &ResumeDocument, plan: &mut ActionPlan) -> Metric {
    let mut score: i64 = 100;
    let mut details = Vec::new();

    if !doc.summary.trim().is_empty() {
        let words = word_count(&doc.summary);
        if !(SUMMARY_MIN_WORDS..=SUMMARY_MAX_WORDS).contains(&words) {
            score -= SUMMARY_PENALTY;
            details.push("Summary should be between 30-100 words.".to_string());
            if words > SUMMARY_MAX_WORDS {
                plan.push(SHORTEN_SUMMARY_ACTION);
            }
        }
    }

    let (mut long, mut short) = (0_i64, 0_i64);
    for bullet in doc.bullets() {
        let words = word_count(bullet);
        if words > LONG_BULLET_WORDS {
            long += 1;
        } else if words < SHORT_BULLET_WORDS {
            short += 1;
        }
    }

    score -= BULLET_PENALTY * long;
    score -= BULLET_PENALTY * short;

    if long > 0 {
        details.push(format!(
            "{long} bullet points are too long (aim for < 2 lines)."
        ));
        plan.push(SPLIT_BULLETS_ACTION);
    }
    if short > 0 {
        details.push(format!("{short} bullet points are too short to be impactful."));
    }

    Metric::new(score.max(0), LABEL, details)
}
