use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured resume content as held by the UI and exchanged with the assistant.
///
/// Every field defaults when absent: partial documents coming from the browser
/// or from the AI still deserialize and are analyzable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub id: String,
    pub title: String,
    pub company: String,
    pub dates: String,
    /// One achievement or responsibility per line.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub dates: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ResumeDocument {
    /// All experience bullets, flattened in document order.
    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|e| e.description.iter().map(String::as_str))
    }

    /// Assigns a fresh UUID to every entry whose `id` is blank.
    /// Returns how many ids were generated.
    pub fn fill_missing_ids(&mut self) -> usize {
        let mut filled = 0;
        let ids = self
            .experience
            .iter_mut()
            .map(|e| &mut e.id)
            .chain(self.education.iter_mut().map(|e| &mut e.id))
            .chain(self.projects.iter_mut().map(|p| &mut p.id));
        for id in ids {
            if id.trim().is_empty() {
                *id = Uuid::new_v4().to_string();
                filled += 1;
            }
        }
        filled
    }
}
