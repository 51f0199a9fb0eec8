//! Axum route handlers for the chat and cover-letter API.

use axum::{extract::State, http::HeaderMap, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::llm_client::prompts::FALLBACK_COVER_LETTER;
use crate::models::chat::{AssistantReply, FilePayload};
use crate::models::resume::ResumeDocument;
use crate::state::AppState;
use crate::usage::client_id;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub resume: ResumeDocument,
    #[serde(default)]
    pub message: String,
    pub file: Option<FilePayload>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub chat_response: String,
    pub updated_resume: ResumeDocument,
    pub suggestions: Vec<String>,
    /// Analysis of `updated_resume`.
    pub analysis: AnalysisResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub job_title: String,
    pub company_name: String,
    pub resume_file: FilePayload,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/chat
///
/// Cooldown reservation → assistant turn → ids filled → analysis of the new resume.
/// A failed AI call degrades to the fallback reply and releases the reservation,
/// so it does not start the cooldown.
pub async fn handle_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let client = client_id(&headers);

    let reservation = state
        .usage_gate
        .try_begin(&client, Utc::now())
        .await
        .map_err(|status| AppError::CooldownActive {
            retry_after_secs: status.retry_after_secs,
            time_left: status.time_left,
        })?;

    let file = match validate_turn(request.file, &request.message) {
        Ok(file) => file,
        Err(e) => {
            state.usage_gate.release(reservation).await;
            return Err(e);
        }
    };

    let reply = match state
        .assistant
        .update_resume(&request.resume, &request.message, file.as_ref())
        .await
    {
        Ok(mut reply) => {
            let generated = reply.updated_resume.fill_missing_ids();
            state.usage_gate.commit(reservation, Utc::now()).await;
            info!(client = %client, generated_ids = generated, "Chat turn completed");
            reply
        }
        Err(e) => {
            state.usage_gate.release(reservation).await;
            warn!(client = %client, "Assistant unavailable, returning fallback: {e}");
            AssistantReply::fallback(&request.resume)
        }
    };

    let analysis = state.analyzer.analyze(&reply.updated_resume);

    Ok(Json(ChatResponse {
        chat_response: reply.chat_response,
        updated_resume: reply.updated_resume,
        suggestions: reply.suggestions,
        analysis,
    }))
}

fn validate_turn(file: Option<FilePayload>, message: &str) -> Result<Option<FilePayload>, AppError> {
    let file = file.map(FilePayload::normalized).transpose()?;
    if message.trim().is_empty() && file.is_none() {
        return Err(AppError::Validation(
            "message cannot be empty without a file".to_string(),
        ));
    }
    Ok(file)
}

/// POST /api/v1/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if request.job_title.trim().is_empty() || request.company_name.trim().is_empty() {
        return Err(AppError::Validation(
            "jobTitle and companyName are required".to_string(),
        ));
    }
    let resume_file = request.resume_file.normalized()?;

    let cover_letter = state
        .assistant
        .write_cover_letter(&request.job_title, &request.company_name, &resume_file)
        .await
        .unwrap_or_else(|e| {
            warn!("Cover letter generation failed, returning fallback: {e}");
            FALLBACK_COVER_LETTER.to_string()
        });

    Ok(Json(CoverLetterResponse { cover_letter }))
}
