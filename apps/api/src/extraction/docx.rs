//! Plain-text extraction from Word (`.docx`) documents.
//!
//! A DOCX file is a zip archive; the body lives in `word/document.xml`.
//! Only the text runs (`w:t`) are kept. Paragraph ends and breaks become
//! newlines, tabs stay tabs. Styling, headers and footers are ignored.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::extraction::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

pub fn read_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(docx_error)?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(docx_error)?
        .read_to_string(&mut xml)
        .map_err(docx_error)?;
    text_runs(&xml)
}

fn text_runs(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run = false;

    loop {
        match reader.read_event().map_err(docx_error)? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run => text.push_str(&t.unescape().map_err(docx_error)?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

fn docx_error(e: impl std::fmt::Display) -> ExtractionError {
    ExtractionError::Docx(e.to_string())
}

/// Builds a minimal DOCX with one paragraph per entry.
#[cfg(test)]
pub fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;

    let body: String = paragraphs
        .iter()
        .map(|p| format!(r#"<w:p><w:r><w:t xml:space="preserve">{p}</w:t></w:r></w:p>"#))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file(DOCUMENT_PART, zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_paragraph_runs() {
        let bytes = docx_fixture(&["Contact", "Skills &amp; Tools", "Education"]);
        let text = read_docx(&bytes).unwrap();
        assert_eq!(text, "Contact\nSkills & Tools\nEducation\n");
    }

    #[test]
    fn test_tabs_and_breaks() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(text_runs(xml).unwrap(), "a\tb\nc\n");
    }

    #[test]
    fn test_text_outside_runs_is_ignored() {
        let xml = r#"<w:document><w:body><w:p><w:pPr>style</w:pPr><w:r><w:t>kept</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(text_runs(xml).unwrap(), "kept\n");
    }

    #[test]
    fn test_not_a_zip() {
        let err = read_docx(b"plain text, not a zip").unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(_)));
    }

    #[test]
    fn test_zip_without_document_part() {
        use std::io::Write;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("readme.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hello").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = read_docx(&bytes).unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(_)));
    }
}
