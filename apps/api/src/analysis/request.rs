//! Request Builder — assembles the single structured request sent to the
//! analysis service. Pure data transformation, no network I/O, so the whole
//! contract is unit-testable without a live service.

use serde::Serialize;

use crate::analysis::prompts::{ANALYSIS_PREAMBLE, ATTACHMENT_NOTE, SCHEMA_DIRECTIVE};
use crate::document::ResumeInput;
use crate::errors::AnalysisError;

/// One content part of the outbound request. Serializes to the wire shape
/// the service expects: `{"text": ...}` or `{"inlineData": {...}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RequestPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// The assembled request: ordered content parts. The fixed response schema is
/// attached by the client at dispatch time; it is part of every request.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub parts: Vec<RequestPart>,
}

impl AnalysisRequest {
    /// Builds the request from the selected resume input and the job
    /// description.
    ///
    /// Validation happens before any part is assembled: an absent resume
    /// input or an empty/whitespace-only job description is rejected, so no
    /// wasted service call can ever be attempted for bad input.
    pub fn build(
        resume: Option<ResumeInput>,
        job_description: &str,
    ) -> Result<Self, AnalysisError> {
        let resume = resume
            .ok_or_else(|| AnalysisError::InvalidInput("no resume was provided".to_string()))?;
        if job_description.trim().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "job description must not be empty".to_string(),
            ));
        }

        let mut parts = Vec::with_capacity(2);
        let mut prompt = String::from(ANALYSIS_PREAMBLE);

        match resume {
            ResumeInput::BinaryAttachment {
                media_type,
                payload,
            } => {
                parts.push(RequestPart::InlineData {
                    inline_data: InlineData {
                        mime_type: media_type,
                        data: payload,
                    },
                });
                prompt.push_str(ATTACHMENT_NOTE);
            }
            ResumeInput::Text { content } => {
                prompt.push_str("\nRESUME TEXT:\n");
                prompt.push_str(&content);
                prompt.push('\n');
            }
        }

        prompt.push_str("\nJOB DESCRIPTION:\n");
        prompt.push_str(job_description);
        prompt.push('\n');
        prompt.push_str(SCHEMA_DIRECTIVE);

        parts.push(RequestPart::Text { text: prompt });

        Ok(Self { parts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt_of(request: &AnalysisRequest) -> &str {
        match request.parts.last() {
            Some(RequestPart::Text { text }) => text,
            other => panic!("expected trailing text part, got {other:?}"),
        }
    }

    #[test]
    fn test_request_always_carries_jd_segment_and_schema_directive() {
        let request = AnalysisRequest::build(
            Some(ResumeInput::text("Experienced backend engineer...")),
            "Seeking backend engineer with Go experience",
        )
        .unwrap();

        let prompt = prompt_of(&request);
        assert!(prompt.contains("JOB DESCRIPTION:\nSeeking backend engineer with Go experience"));
        assert!(prompt.contains(SCHEMA_DIRECTIVE));
    }

    #[test]
    fn test_text_resume_appears_verbatim() {
        let content = "Experienced backend engineer who shipped Go services at scale.";
        let request = AnalysisRequest::build(
            Some(ResumeInput::text(content)),
            "Backend engineer role",
        )
        .unwrap();

        assert_eq!(request.parts.len(), 1);
        assert!(prompt_of(&request).contains(content));
    }

    #[test]
    fn test_binary_resume_becomes_leading_inline_part() {
        let request = AnalysisRequest::build(
            Some(ResumeInput::BinaryAttachment {
                media_type: "application/pdf".to_string(),
                payload: "JVBERi0xLjc=".to_string(),
            }),
            "Backend engineer role",
        )
        .unwrap();

        assert_eq!(request.parts.len(), 2);
        match &request.parts[0] {
            RequestPart::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "application/pdf");
                assert_eq!(inline_data.data, "JVBERi0xLjc=");
            }
            other => panic!("expected inline data part first, got {other:?}"),
        }
        let prompt = prompt_of(&request);
        assert!(prompt.contains("file attachment above"));
        assert!(!prompt.contains("RESUME TEXT:"));
    }

    #[test]
    fn test_empty_jd_is_rejected() {
        let err = AnalysisRequest::build(Some(ResumeInput::text("resume")), "").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn test_whitespace_only_jd_is_rejected() {
        let err =
            AnalysisRequest::build(Some(ResumeInput::text("resume")), "  \n\t  ").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn test_absent_resume_is_rejected() {
        let err = AnalysisRequest::build(None, "Backend engineer role").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn test_parts_serialize_to_wire_shape() {
        let text = serde_json::to_value(RequestPart::Text {
            text: "hello".to_string(),
        })
        .unwrap();
        assert_eq!(text, serde_json::json!({"text": "hello"}));

        let inline = serde_json::to_value(RequestPart::InlineData {
            inline_data: InlineData {
                mime_type: "application/pdf".to_string(),
                data: "AAAA".to_string(),
            },
        })
        .unwrap();
        assert_eq!(
            inline,
            serde_json::json!({"inlineData": {"mimeType": "application/pdf", "data": "AAAA"}})
        );
    }
}
