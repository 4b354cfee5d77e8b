//! Document Loader — turns a user-supplied file into a [`ResumeInput`].
//!
//! Plain text is read as-is, word-processing documents are reduced to text
//! locally, and PDFs travel to the model untouched as an inline attachment.
//! The loader performs no size validation; an upload cap is an HTTP-layer
//! concern.

pub mod docx;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::errors::AnalysisError;

pub const MEDIA_TYPE_TEXT: &str = "text/plain";
pub const MEDIA_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MEDIA_TYPE_PDF: &str = "application/pdf";

/// The resume representation sent to the analysis service.
///
/// Exactly one shape exists at a time — extracted/pasted text, or the
/// original document bytes for the model to interpret directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeInput {
    Text { content: String },
    BinaryAttachment { media_type: String, payload: String },
}

impl ResumeInput {
    pub fn text(content: impl Into<String>) -> Self {
        ResumeInput::Text {
            content: content.into(),
        }
    }
}

/// Loads a file into a [`ResumeInput`] based on its declared media type.
///
/// - `text/plain` → full contents as [`ResumeInput::Text`]
/// - DOCX → locally extracted text as [`ResumeInput::Text`]
/// - `application/pdf` → base64-encoded [`ResumeInput::BinaryAttachment`]
///   carrying the original media type
///
/// Any other media type is rejected, naming the offending type.
pub fn load_resume(bytes: &[u8], media_type: &str) -> Result<ResumeInput, AnalysisError> {
    match media_type {
        MEDIA_TYPE_TEXT => Ok(ResumeInput::Text {
            content: String::from_utf8_lossy(bytes).into_owned(),
        }),
        MEDIA_TYPE_DOCX => Ok(ResumeInput::Text {
            content: docx::extract_text(bytes)?,
        }),
        MEDIA_TYPE_PDF => Ok(ResumeInput::BinaryAttachment {
            media_type: media_type.to_string(),
            payload: BASE64.encode(bytes),
        }),
        other => Err(AnalysisError::UnsupportedFormat(other.to_string())),
    }
}

/// The resume source selected for one analysis session.
///
/// A successful load replaces the previous selection wholesale — text and
/// attachment are never merged. A failed load leaves the previous selection
/// untouched.
#[derive(Debug, Default)]
pub struct ResumeSelection {
    current: Option<ResumeInput>,
}

impl ResumeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, bytes: &[u8], media_type: &str) -> Result<(), AnalysisError> {
        let input = load_resume(bytes, media_type)?;
        self.current = Some(input);
        Ok(())
    }

    pub fn select_text(&mut self, content: impl Into<String>) {
        self.current = Some(ResumeInput::text(content));
    }

    pub fn current(&self) -> Option<&ResumeInput> {
        self.current.as_ref()
    }

    pub fn into_input(self) -> Option<ResumeInput> {
        self.current
    }
}
