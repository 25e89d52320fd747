//! Document-to-text extraction for uploaded resumes.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; the default backend is
//! `DocumentExtractor` (PDF via `pdf-extract`, DOCX via `zip` + `quick-xml`,
//! text with BOM/charset detection via `encoding_rs`).
//! Any `ExtractionError` is folded into a fail-soft analysis result by the
//! upload handler, so the variants only ever reach the logs.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub mod document;
pub mod docx;
pub mod media_type;

pub use document::DocumentExtractor;
pub use media_type::DocumentKind;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("uploaded file is empty")]
    Empty,

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("text could not be decoded as {0}")]
    Undecodable(&'static str),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A single file taken from a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    /// Declared `Content-Type` of the part, if the client sent one.
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedDocument {
    pub fn kind(&self) -> Result<DocumentKind, ExtractionError> {
        media_type::resolve_kind(
            self.content_type.as_deref(),
            self.file_name.as_deref(),
            &self.bytes,
        )
    }
}

/// Converts uploaded bytes into plain text. Implement this to swap in a
/// different parser without touching the handlers.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, document: UploadedDocument) -> Result<String, ExtractionError>;

    /// Backend name for diagnostics.
    fn backend_name(&self) -> &'static str;
}
