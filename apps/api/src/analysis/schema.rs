//! The fixed structural contract the analysis service is instructed to honor.
//!
//! Sent as `responseSchema` with every request and mirrored one-to-one by the
//! structs in `analysis::result`, so a reply either deserializes completely
//! or is rejected in a single validation pass. The service's schema dialect
//! is an OpenAPI subset with uppercase type names.

use serde_json::{json, Value};

pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "atsScore": {
                "type": "OBJECT",
                "properties": {
                    "score": { "type": "INTEGER", "description": "Score from 0 to 100" },
                    "issues": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["score", "issues"]
            },
            "jobMatch": {
                "type": "OBJECT",
                "properties": {
                    "matchPercentage": { "type": "INTEGER", "description": "Percentage from 0 to 100" },
                    "strongMatches": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "weakMatches": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["matchPercentage", "strongMatches", "weakMatches"]
            },
            "keywords": {
                "type": "OBJECT",
                "properties": {
                    "matched": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "missing": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "overused": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["matched", "missing", "overused"]
            },
            "sectionFeedback": {
                "type": "OBJECT",
                "properties": {
                    "summary": { "type": "STRING" },
                    "skills": { "type": "STRING" },
                    "experience": { "type": "STRING" },
                    "education": { "type": "STRING" },
                    "projects": { "type": "STRING" }
                },
                "required": ["summary", "skills", "experience", "education", "projects"]
            },
            "skillGap": {
                "type": "OBJECT",
                "properties": {
                    "missingMustHaves": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "missingNiceToHaves": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "learningPriority": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["missingMustHaves", "missingNiceToHaves", "learningPriority"]
            },
            "bulletPoints": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "original": { "type": "STRING" },
                        "improved": { "type": "STRING" }
                    },
                    "required": ["original", "improved"]
                }
            },
            "verdict": {
                "type": "OBJECT",
                "properties": {
                    "suitability": { "type": "STRING", "description": "e.g., High, Medium, Low" },
                    "nextSteps": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "alternativeRoles": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["suitability", "nextSteps", "alternativeRoles"]
            },
            "finalFeedback": {
                "type": "OBJECT",
                "properties": {
                    "topImprovements": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "confidence": { "type": "INTEGER", "description": "Confidence score 0-100" }
                },
                "required": ["topImprovements", "confidence"]
            }
        },
        "required": [
            "atsScore", "jobMatch", "keywords", "sectionFeedback",
            "skillGap", "bulletPoints", "verdict", "finalFeedback"
        ]
    })
}
