use crate::analysis::models::{ActionPlan, Metric};
use crate::models::resume::ResumeDocument;

pub const LABEL: &str = "Keywords";

/// Share of listed skills that should be evidenced in prose for full marks.
const UTILIZATION_TARGET: f64 = 0.50;
const UTILIZATION_WARNING_BELOW: f64 = 0.30;

pub const ADD_SKILLS_ACTION: &str = "Add a Skills section with 6-10 core competencies.";
pub const PROVE_SKILLS_ACTION: &str =
    "Prove your skills: Mention your listed technologies within your job descriptions.";

/// Lowercased text that skills are searched in: the serialized experience
/// section followed by the summary. Built once per analysis.
pub fn build_haystack(doc: &ResumeDocument) -> String {
    let experience = serde_json::to_string(&doc.experience).unwrap_or_default();
    let mut haystack = String::with_capacity(experience.len() + doc.summary.len());
    haystack.push_str(&experience);
    haystack.push_str(&doc.summary);
    haystack.to_lowercase()
}

/// Skills from the list that appear somewhere in the haystack.
pub fn evidenced_skills<'a>(skills: &'a [String], haystack: &str) -> Vec<&'a str> {
    skills
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .map(String::as_str)
        .collect()
}

/// Skill utilization: how many declared skills are backed by the experience
/// section or the summary.
pub fn score_keywords(doc: &ResumeDocument, plan: &mut ActionPlan) -> Metric {
    if doc.skills.is_empty() {
        plan.push(ADD_SKILLS_ACTION);
        return Metric::new(0, LABEL, vec!["No skills listed.".to_string()]);
    }

    let haystack = build_haystack(doc);
    let found = evidenced_skills(&doc.skills, &haystack).len();
    let utilization = found as f64 / doc.skills.len() as f64;
    let score = (utilization / UTILIZATION_TARGET * 100.0).min(100.0).round() as i64;

    let detail = if utilization < UTILIZATION_WARNING_BELOW {
        plan.push(PROVE_SKILLS_ACTION);
        "Many skills listed aren't mentioned in your experience."
    } else {
        "Good job connecting skills to experience."
    };

    Metric::new(score, LABEL, vec![detail.to_string()])
}
