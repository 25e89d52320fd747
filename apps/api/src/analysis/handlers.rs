//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::analysis::{analyze, AnalysisResult};
use crate::errors::AppError;
use crate::extraction::UploadedDocument;
use crate::state::AppState;

/// Multipart field carrying the resume document.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
}

/// POST /api/analyze
///
/// Scores typed or pasted resume text. Empty text is accepted and scores 0.
pub async fn handle_analyze_text(
    Json(request): Json<AnalyzeTextRequest>,
) -> Json<AnalysisResult> {
    let result = analyze(&request.resume_text);
    debug!(
        chars = request.resume_text.len(),
        score = result.score(),
        suggestions = result.suggestions().len(),
        "Analyzed resume text"
    );
    Json(result)
}

/// POST /api/analyze-file
///
/// Extracts text from the uploaded `file` part and scores it. Extraction
/// failures are logged and answered with the fixed error result, never with
/// a transport-level error.
pub async fn handle_analyze_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let document = read_file_field(&mut multipart).await?;
    let file_name = document.file_name.clone();
    let size = document.bytes.len();

    let result = match state.extractor.extract(document).await {
        Ok(text) => analyze(&text),
        Err(e) => {
            warn!(
                file_name = ?file_name,
                size,
                backend = state.extractor.backend_name(),
                "Resume extraction failed: {e}"
            );
            AnalysisResult::extraction_failure()
        }
    };

    info!(
        file_name = ?file_name,
        size,
        score = result.score(),
        "Analyzed uploaded resume"
    );
    Ok(Json(result))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedDocument, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        return Ok(UploadedDocument {
            file_name,
            content_type,
            bytes,
        });
    }
    Err(AppError::Validation(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}
