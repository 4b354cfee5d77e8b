//! Text extraction for OOXML word-processing documents.
//!
//! A `.docx` file is a ZIP package whose document body lives in
//! `word/document.xml`. Extraction walks that XML and collects `<w:t>` run
//! text, rebuilding paragraph and line breaks. Any failure aborts the load —
//! partial or garbled text is never returned.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::AnalysisError;

const DOCUMENT_ENTRY: &str = "word/document.xml";

pub fn extract_text(bytes: &[u8]) -> Result<String, AnalysisError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| extraction_error(format!("not a readable OOXML package: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_ENTRY)
        .map_err(|e| extraction_error(format!("{DOCUMENT_ENTRY} missing: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| extraction_error(format!("failed to read {DOCUMENT_ENTRY}: {e}")))?;

    let text = collect_runs(&xml)?;
    if text.trim().is_empty() {
        return Err(extraction_error("document contains no text"));
    }
    Ok(text)
}

fn extraction_error(detail: impl Into<String>) -> AnalysisError {
    AnalysisError::DocumentExtraction(detail.into())
}

/// Concatenates `<w:t>` run text. Paragraph ends become newlines; explicit
/// breaks and tabs are preserved.
fn collect_runs(xml: &str) -> Result<String, AnalysisError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" | b"w:br" | b"w:cr" => out.push('\n'),
                b"w:tab" => out.push('\t'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_run_text => {
                let run = t
                    .unescape()
                    .map_err(|e| extraction_error(format!("invalid run text: {e}")))?;
                out.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(extraction_error(format!("malformed document XML: {e}"))),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn docx_fixture(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_ENTRY, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Experienced backend engineer</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">Go, Rust </w:t></w:r><w:r><w:t>&amp; SQL</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_extracts_paragraphs_and_joins_runs() {
        let bytes = docx_fixture(BODY);
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "Experienced backend engineer\nGo, Rust & SQL\n");
    }

    #[test]
    fn test_explicit_breaks_and_tabs_are_preserved() {
        let xml = r#"<w:document xmlns:w="x"><w:body>
            <w:p><w:r><w:t>line one</w:t><w:br/><w:t>line two</w:t><w:tab/><w:t>tabbed</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let text = extract_text(&docx_fixture(xml)).unwrap();
        assert_eq!(text, "line one\nline two\ttabbed\n");
    }

    #[test]
    fn test_not_a_zip_fails_extraction() {
        let err = extract_text(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, AnalysisError::DocumentExtraction(_)));
    }

    #[test]
    fn test_missing_document_entry_fails_extraction() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_text(&bytes).unwrap_err();
        match &err {
            AnalysisError::DocumentExtraction(detail) => {
                assert!(detail.contains(DOCUMENT_ENTRY));
            }
            other => panic!("expected DocumentExtraction, got {other:?}"),
        }
    }

    #[test]
    fn test_textless_document_fails_instead_of_returning_empty() {
        let xml = r#"<w:document xmlns:w="x"><w:body><w:p/></w:body></w:document>"#;
        let err = extract_text(&docx_fixture(xml)).unwrap_err();
        assert!(matches!(err, AnalysisError::DocumentExtraction(_)));
    }

    #[test]
    fn test_invalid_entity_fails_instead_of_garbling() {
        let xml = r#"<w:document xmlns:w="x"><w:body>
            <w:p><w:r><w:t>broken &entity; here</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let err = extract_text(&docx_fixture(xml)).unwrap_err();
        assert!(matches!(err, AnalysisError::DocumentExtraction(_)));
    }
}
