use crate::analysis::models::Metric;
use crate::models::resume::ResumeDocument;

pub const LABEL: &str = "ATS Compatibility";

const POINTS_PER_CHECK: i64 = 20;

/// Structural completeness: contact fields plus both core sections.
/// Each satisfied check is worth 20 points.
pub fn score_ats(doc: &ResumeDocument) -> Metric {
    let field_checks = [
        (&doc.full_name, "Missing full name."),
        (&doc.email, "Missing email address."),
        (&doc.phone, "Missing phone number."),
        (&doc.location, "Missing location."),
    ];

    let mut score = 0;
    let mut details = Vec::new();

    for (value, missing) in field_checks {
        if value.is_empty() {
            details.push(missing.to_string());
        } else {
            score += POINTS_PER_CHECK;
        }
    }

    if !doc.experience.is_empty() && !doc.education.is_empty() {
        score += POINTS_PER_CHECK;
    } else {
        details.push("Missing experience or education section.".to_string());
    }

    Metric::new(score, LABEL, details)
}
