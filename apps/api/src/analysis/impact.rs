use crate::analysis::heuristics::CompiledHeuristics;
use crate::analysis::models::{ActionPlan, Metric};
use crate::models::resume::ResumeDocument;

pub const LABEL: &str = "Impact";

/// Share of bullets that should open with a strong verb for full verb points.
const VERB_TARGET: f64 = 0.70;
const VERB_WARNING_BELOW: f64 = 0.50;
/// Share of bullets that should carry a metric for full quantification points.
const QUANT_TARGET: f64 = 0.40;
const QUANT_WARNING_BELOW: f64 = 0.30;
const SUBSCORE_CAP: f64 = 50.0;
const PASSIVE_SCORE_BELOW: i64 = 50;
/// The passive-voice hint only fires while the plan is still short.
const PASSIVE_PLAN_ROOM: usize = 2;

pub const QUANTIFY_ACTION: &str =
    "Quantify your impact: Add metrics to at least 1 in 3 bullet points.";
pub const PASSIVE_ACTION: &str =
    "Replace passive phrases like 'Responsible for' with active action verbs.";

/// Raw counts behind the impact score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactBreakdown {
    pub bullet_count: usize,
    pub strong_openers: usize,
    pub quantified: usize,
}

impl ImpactBreakdown {
    pub fn verb_ratio(&self) -> f64 {
        ratio(self.strong_openers, self.bullet_count)
    }

    pub fn quant_ratio(&self) -> f64 {
        ratio(self.quantified, self.bullet_count)
    }

    pub fn verb_points(&self) -> f64 {
        (self.verb_ratio() / VERB_TARGET * SUBSCORE_CAP).min(SUBSCORE_CAP)
    }

    pub fn quant_points(&self) -> f64 {
        (self.quant_ratio() / QUANT_TARGET * SUBSCORE_CAP).min(SUBSCORE_CAP)
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

pub fn count_bullets(doc: &ResumeDocument, heuristics: &CompiledHeuristics) -> ImpactBreakdown {
    let mut breakdown = ImpactBreakdown {
        bullet_count: 0,
        strong_openers: 0,
        quantified: 0,
    };
    for bullet in doc.bullets() {
        breakdown.bullet_count += 1;
        if heuristics.opens_with_strong_verb(bullet) {
            breakdown.strong_openers += 1;
        }
        if heuristics.is_quantified(bullet) {
            breakdown.quantified += 1;
        }
    }
    breakdown
}

/// Verb strength plus quantification, 50 points each.
pub fn score_impact(
    doc: &ResumeDocument,
    heuristics: &CompiledHeuristics,
    plan: &mut ActionPlan,
) -> Metric {
    let breakdown = count_bullets(doc, heuristics);

    if breakdown.bullet_count == 0 {
        return Metric::new(
            0,
            LABEL,
            vec!["Add bullet points to your experience.".to_string()],
        );
    }

    let mut details = Vec::new();

    if breakdown.verb_ratio() < VERB_WARNING_BELOW {
        details.push(
            "Start more bullet points with power verbs (e.g. Spearheaded, Orchestrated, Launched)."
                .to_string(),
        );
    }

    if breakdown.quant_ratio() < QUANT_WARNING_BELOW {
        details.push(format!(
            "Only {} of {} bullet points include a measurable result (%, $, 10x, 5k users).",
            breakdown.quantified, breakdown.bullet_count
        ));
        plan.push(QUANTIFY_ACTION);
    }

    let score = (breakdown.verb_points() + breakdown.quant_points()).round() as i64;

    if score < PASSIVE_SCORE_BELOW && plan.has_fewer_than(PASSIVE_PLAN_ROOM) {
        plan.push(PASSIVE_ACTION);
    }

    Metric::new(score, LABEL, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::heuristics::HeuristicTables;
    use crate::models::resume::ExperienceEntry;

    fn doc_with(bullets: &[&str]) -> ResumeDocument {
        ResumeDocument {
            experience: vec![ExperienceEntry {
                description: bullets.iter().map(|b| b.to_string()).collect(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn run(doc: &ResumeDocument) -> (Metric, Vec<String>) {
        let h = HeuristicTables::default().compile().unwrap();
        let mut plan = ActionPlan::default();
        let metric = score_impact(doc, &h, &mut plan);
        (metric, plan.into_capped())
    }

    #[test]
    fn test_no_bullets_scores_zero() {
        let (m, plan) = run(&ResumeDocument::default());
        assert_eq!(m.score, 0);
        assert_eq!(m.details, vec!["Add bullet points to your experience.".to_string()]);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_seven_verbs_four_metrics_of_ten_is_full_marks() {
        let doc = doc_with(&[
            "Led the platform team through a rewrite, cutting latency 30%",
            "Designed a billing service that lifted conversion 12%",
            "Reduced cloud spend 25% by rightsizing clusters",
            "Launched a referral program adding 18% more signups",
            "Developed internal tooling for release management",
            "Managed vendor relationships across three regions",
            "Implemented feature flags for staged rollouts",
            "Responsible for on-call rotations",
            "Worked with design on onboarding flows",
            "Helped support with escalations",
        ]);
        let (m, plan) = run(&doc);
        assert_eq!(m.score, 100);
        assert!(m.details.is_empty());
        assert!(plan.is_empty());
    }

    #[test]
    fn test_partial_credit_rounds() {
        // 1/2 strong openers -> 35.71 points, 0/2 quantified -> 0 points.
        let doc = doc_with(&["Led the API redesign", "Worked on the dashboard"]);
        let (m, plan) = run(&doc);
        assert_eq!(m.score, 36);
        assert_eq!(plan, vec![QUANTIFY_ACTION.to_string(), PASSIVE_ACTION.to_string()]);
    }

    #[test]
    fn test_weak_verbs_flagged() {
        let doc = doc_with(&[
            "Responsible for the data pipeline, saving $40k per year",
            "Helped the team cut build time 50%",
        ]);
        let (m, plan) = run(&doc);
        // 0 verb points, quant ratio 1.0 -> capped at 50
        assert_eq!(m.score, 50);
        assert_eq!(m.details.len(), 1);
        assert!(m.details[0].starts_with("Start more bullet points with power verbs"));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_passive_hint_needs_room_in_plan() {
        let h = HeuristicTables::default().compile().unwrap();
        let mut plan = ActionPlan::default();
        plan.push("earlier suggestion");
        let doc = doc_with(&["Worked on things"]);
        let m = score_impact(&doc, &h, &mut plan);
        assert_eq!(m.score, 0);
        // Quantify pushed (len 2), passive skipped since plan is no longer short.
        assert_eq!(
            plan.into_capped(),
            vec!["earlier suggestion".to_string(), QUANTIFY_ACTION.to_string()]
        );
    }

    #[test]
    fn test_breakdown_counts_across_entries() {
        let doc = ResumeDocument {
            experience: vec![
                ExperienceEntry {
                    description: vec!["Saved $10 on lunch".into()],
                    ..Default::default()
                },
                ExperienceEntry {
                    description: vec!["Optimized 3 queries".into(), "Attended meetings".into()],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let h = HeuristicTables::default().compile().unwrap();
        let b = count_bullets(&doc, &h);
        assert_eq!(b.bullet_count, 3);
        assert_eq!(b.strong_openers, 2);
        assert_eq!(b.quantified, 1);
    }
}
