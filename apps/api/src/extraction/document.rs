use async_trait::async_trait;
use bytes::Bytes;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use tracing::debug;

use crate::extraction::docx::read_docx;
use crate::extraction::{DocumentKind, ExtractionError, TextExtractor, UploadedDocument};

/// Default extraction backend: PDF through `pdf-extract`, DOCX through
/// `zip` + `quick-xml`, and plain text in whatever charset it arrives in.
///
/// Archive and PDF parsing are CPU-bound (and `pdf-extract` can panic on
/// malformed input), so both run inside `spawn_blocking`; a panic surfaces
/// as `ExtractionError::Task`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExtractor;

#[async_trait]
impl TextExtractor for DocumentExtractor {
    async fn extract(&self, document: UploadedDocument) -> Result<String, ExtractionError> {
        if document.bytes.is_empty() {
            return Err(ExtractionError::Empty);
        }

        let kind = document.kind()?;
        debug!(
            file_name = ?document.file_name,
            kind = kind.mime(),
            bytes = document.bytes.len(),
            "Extracting uploaded document"
        );

        match kind {
            DocumentKind::Pdf => extract_pdf(document.bytes).await,
            DocumentKind::Docx => extract_docx(document.bytes).await,
            DocumentKind::Text => decode_text(&document.bytes),
        }
    }

    fn backend_name(&self) -> &'static str {
        "document"
    }
}

async fn extract_pdf(bytes: Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await?
        .map_err(|e| ExtractionError::Pdf(e.to_string()))
}

async fn extract_docx(bytes: Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || read_docx(&bytes)).await?
}

/// A byte-order mark decides the charset (UTF-8, UTF-16LE/BE). Without one,
/// valid UTF-8 is taken as is and anything else is read as windows-1252,
/// the usual charset of legacy Windows and ISO-8859-1 text files.
fn decode_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None if std::str::from_utf8(bytes).is_ok() => (UTF_8, bytes),
        None => (WINDOWS_1252, bytes),
    };

    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        return Err(ExtractionError::Undecodable(encoding.name()));
    }
    Ok(text.into_owned())
}
