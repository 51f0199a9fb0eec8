use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;

/// An uploaded file forwarded to the assistant as inline base64 data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePayload {
    pub data: String,
    pub mime_type: String,
}

impl FilePayload {
    /// Strips a `data:<mime>;base64,` prefix and checks the MIME type.
    /// Accepts PDFs and images, matching the upload picker.
    pub fn normalized(self) -> Result<Self, AppError> {
        let mime_type = self.mime_type.trim().to_ascii_lowercase();
        if mime_type != "application/pdf" && !mime_type.starts_with("image/") {
            return Err(AppError::Validation(format!(
                "Unsupported file type '{}': upload a PDF or an image",
                self.mime_type
            )));
        }

        let data = match self.data.split_once(";base64,") {
            Some((prefix, rest)) if prefix.starts_with("data:") => rest.to_string(),
            _ => self.data,
        };
        if data.trim().is_empty() {
            return Err(AppError::Validation("file data cannot be empty".to_string()));
        }

        Ok(Self { data, mime_type })
    }
}

/// What the assistant hands back for one chat turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantReply {
    pub chat_response: String,
    pub updated_resume: ResumeDocument,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl AssistantReply {
    /// Reply used when the AI service is unavailable: the resume is left untouched.
    pub fn fallback(current: &ResumeDocument) -> Self {
        Self {
            chat_response: "I'm having trouble analyzing that right now. Please try again."
                .to_string(),
            updated_resume: current.clone(),
            suggestions: vec!["Try Again".to_string()],
        }
    }
}
