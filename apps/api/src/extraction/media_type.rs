use encoding_rs::Encoding;

use crate::extraction::ExtractionError;

const PDF_MAGIC: &[u8] = b"%PDF-";
const OCTET_STREAM: &str = "application/octet-stream";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Text,
}

impl DocumentKind {
    pub fn mime(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Docx => DOCX_MIME,
            DocumentKind::Text => "text/plain",
        }
    }

    fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" | "application/x-pdf" => Some(DocumentKind::Pdf),
            DOCX_MIME => Some(DocumentKind::Docx),
            "text/plain" | "text/markdown" | "text/x-markdown" => Some(DocumentKind::Text),
            _ => None,
        }
    }

    fn from_extension(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" | "text" | "md" => Some(DocumentKind::Text),
            _ => None,
        }
    }
}

/// Decides how to read an upload.
///
/// Order: PDF magic bytes, then a recognised declared type, then the file
/// extension, then a text sniff (valid UTF-8, or any byte-order mark).
/// Browsers often send `application/octet-stream` or nothing at all, so the
/// declared type is only a hint.
pub fn resolve_kind(
    declared: Option<&str>,
    file_name: Option<&str>,
    bytes: &[u8],
) -> Result<DocumentKind, ExtractionError> {
    if bytes.starts_with(PDF_MAGIC) {
        return Ok(DocumentKind::Pdf);
    }

    let declared = declared.map(essence).filter(|m| !m.is_empty());
    if let Some(kind) = declared.as_deref().and_then(DocumentKind::from_mime) {
        return Ok(kind);
    }

    if let Some(kind) = file_name.and_then(DocumentKind::from_extension) {
        return Ok(kind);
    }

    if looks_like_text(bytes) {
        return Ok(DocumentKind::Text);
    }

    Err(ExtractionError::UnsupportedMediaType(
        declared.unwrap_or_else(|| OCTET_STREAM.to_string()),
    ))
}

/// `Text/Plain; charset=utf-8` -> `text/plain`
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn looks_like_text(bytes: &[u8]) -> bool {
    Encoding::for_bom(bytes).is_some()
        || std::str::from_utf8(bytes).is_ok_and(|s| !s.contains('\0'))
}
