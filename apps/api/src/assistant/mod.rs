//! Resume assistant: chat-driven resume editing and cover letters.
//!
//! `AppState` holds an `Arc<dyn ResumeAssistant>`; `GeminiAssistant` is the
//! production backend and tests swap in canned implementations.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::prompts::{
    build_cover_letter_prompt, build_resume_prompt, cover_letter_schema, resume_response_schema,
};
use crate::llm_client::{LlmClient, Part};
use crate::models::chat::{AssistantReply, FilePayload};
use crate::models::resume::ResumeDocument;

pub mod handlers;

#[async_trait]
pub trait ResumeAssistant: Send + Sync {
    /// One chat turn: returns a replacement resume, a reply and next-step suggestions.
    async fn update_resume(
        &self,
        current: &ResumeDocument,
        message: &str,
        file: Option<&FilePayload>,
    ) -> Result<AssistantReply, AppError>;

    async fn write_cover_letter(
        &self,
        job_title: &str,
        company_name: &str,
        resume_file: &FilePayload,
    ) -> Result<String, AppError>;
}

/// A file on a resume with no name means "extract this resume" rather than "edit".
/// Any non-empty name, even whitespace, counts as an existing resume.
pub fn is_parsing_turn(current: &ResumeDocument, file: Option<&FilePayload>) -> bool {
    file.is_some() && current.full_name.is_empty()
}

pub struct GeminiAssistant(pub LlmClient);

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoverLetterResponse {
    cover_letter: String,
}

#[async_trait]
impl ResumeAssistant for GeminiAssistant {
    async fn update_resume(
        &self,
        current: &ResumeDocument,
        message: &str,
        file: Option<&FilePayload>,
    ) -> Result<AssistantReply, AppError> {
        let parsing = is_parsing_turn(current, file);
        let resume_json = serde_json::to_string(current)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("resume serialization: {e}")))?;
        let prompt = build_resume_prompt(parsing, &resume_json, message);
        debug!(parsing, has_file = file.is_some(), "Requesting resume update");

        let mut parts = vec![Part::Text(&prompt)];
        if let Some(file) = file {
            parts.push(Part::InlineData {
                mime_type: &file.mime_type,
                data: &file.data,
            });
        }

        self.0
            .call_json::<AssistantReply>(&parts, &resume_response_schema())
            .await
            .map_err(|e| AppError::Llm(format!("Resume update failed: {e}")))
    }

    async fn write_cover_letter(
        &self,
        job_title: &str,
        company_name: &str,
        resume_file: &FilePayload,
    ) -> Result<String, AppError> {
        let prompt = build_cover_letter_prompt(job_title, company_name);
        let parts = [
            Part::Text(&prompt),
            Part::InlineData {
                mime_type: &resume_file.mime_type,
                data: &resume_file.data,
            },
        ];

        self.0
            .call_json::<CoverLetterResponse>(&parts, &cover_letter_schema())
            .await
            .map(|r| r.cover_letter)
            .map_err(|e| AppError::Llm(format!("Cover letter generation failed: {e}")))
    }
}
