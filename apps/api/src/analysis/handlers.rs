use axum::{
    extract::{Path, State},
    Json,
};

use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::samples::demo_resumes;
use crate::state::AppState;

/// POST /api/v1/analysis
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(doc): Json<ResumeDocument>,
) -> Json<AnalysisResult> {
    let result = state.analyzer.analyze(&doc);
    tracing::debug!(
        total_score = result.total_score,
        grade = ?result.grade,
        "Resume analyzed"
    );
    Json(result)
}

/// GET /api/v1/samples
pub async fn handle_list_samples() -> Json<Vec<ResumeDocument>> {
    Json(demo_resumes())
}

/// GET /api/v1/samples/:index/analysis
pub async fn handle_sample_analysis(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<AnalysisResult>, AppError> {
    let doc = demo_resumes()
        .into_iter()
        .nth(index)
        .ok_or_else(|| AppError::NotFound(format!("Sample resume {index} not found")))?;
    Ok(Json(state.analyzer.analyze(&doc)))
}
