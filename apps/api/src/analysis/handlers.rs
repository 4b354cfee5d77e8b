//! Axum route handlers for the analyze API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::analysis::{AnalysisRequest, AnalysisResult};
use crate::document::{ResumeInput, ResumeSelection};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// `multipart/form-data` fields:
/// - `resume`: the resume file (txt, docx, or pdf), and/or
/// - `resume_text`: pasted resume text — a later resume field supersedes an
///   earlier one, matching the loader's replace-wholesale rule;
/// - `job_description`: the target job description (required, non-empty).
///
/// Returns the full `AnalysisResult` on success, or the classified error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut selection = ResumeSelection::new();
    let mut job_description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let media_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data: Bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("failed to read resume upload: {e}"))
                })?;
                selection.select_file(&data, &media_type)?;
            }
            Some("resume_text") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("failed to read resume text: {e}"))
                })?;
                if !text.trim().is_empty() {
                    selection.select_text(text);
                }
            }
            Some("job_description") => {
                job_description = field.text().await.map_err(|e| {
                    AppError::Validation(format!("failed to read job description: {e}"))
                })?;
            }
            _ => {}
        }
    }

    let input_kind = match selection.current() {
        Some(ResumeInput::Text { .. }) => "text",
        Some(ResumeInput::BinaryAttachment { .. }) => "attachment",
        None => "none",
    };
    info!("Running analysis (resume input: {input_kind})");

    let request = AnalysisRequest::build(selection.into_input(), &job_description)?;

    let result = state.llm.analyze(request).await?;
    Ok(Json(result))
}
