// Prompt fragments for the analysis request. Static and versionless — not
// user-configurable.

/// Instruction preamble opening every analysis request.
pub const ANALYSIS_PREAMBLE: &str = "You are an expert AI Resume Screener and Career Coach.\n\
    Analyze the uploaded resume (or text) against the provided job description.\n";

/// Appended when the resume travels as an inline file attachment.
pub const ATTACHMENT_NOTE: &str = "\nThe resume is provided as a file attachment above.\n";

/// Fixed closing directive demanding a strictly schema-conforming JSON reply
/// with no extraneous commentary.
pub const SCHEMA_DIRECTIVE: &str = "\nProvide a detailed analysis in strictly JSON format based on the schema provided.\n\
    Be critical yet constructive. Focus on ATS compatibility, keyword matching, and specific improvements.";
