//! Result Model — the canonical shape of one analysis.
//!
//! Pure data, no behavior. Every field is required, so a reply that
//! deserializes IS a complete result; partial results are not a recognized
//! state. Field names mirror the wire schema in `analysis::schema`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScore {
    /// 0–100.
    pub score: u8,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    /// 0–100.
    pub match_percentage: u8,
    pub strong_matches: Vec<String>,
    pub weak_matches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keywords {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub overused: Vec<String>,
}

/// Feedback per fixed resume section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionFeedback {
    pub summary: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub projects: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub missing_must_haves: Vec<String>,
    pub missing_nice_to_haves: Vec<String>,
    /// Priority order is significant — learn the first entry first.
    pub learning_priority: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletPointImprovement {
    pub original: String,
    pub improved: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Qualitative label, e.g. "High", "Medium", "Low".
    pub suitability: String,
    pub next_steps: Vec<String>,
    pub alternative_roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalFeedback {
    pub top_improvements: Vec<String>,
    /// 0–100.
    pub confidence: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub ats_score: AtsScore,
    pub job_match: JobMatch,
    pub keywords: Keywords,
    pub section_feedback: SectionFeedback,
    pub skill_gap: SkillGap,
    pub bullet_points: Vec<BulletPointImprovement>,
    pub verdict: Verdict,
    pub final_feedback: FinalFeedback,
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// A complete, schema-conforming reply as the service would produce it.
    pub const FULL_REPLY: &str = r#"{
        "atsScore": { "score": 72, "issues": ["Tables confuse older ATS parsers"] },
        "jobMatch": {
            "matchPercentage": 80,
            "strongMatches": ["Go microservices"],
            "weakMatches": ["Kubernetes"]
        },
        "keywords": {
            "matched": ["Go", "REST"],
            "missing": ["gRPC"],
            "overused": ["synergy"]
        },
        "sectionFeedback": {
            "summary": "Lead with years of backend experience.",
            "skills": "Group languages and infrastructure separately.",
            "experience": "Quantify the throughput improvements.",
            "education": "Fine as is.",
            "projects": "Link the Go service repository."
        },
        "skillGap": {
            "missingMustHaves": ["gRPC"],
            "missingNiceToHaves": ["Terraform"],
            "learningPriority": ["gRPC", "Terraform"]
        },
        "bulletPoints": [
            {
                "original": "Worked on backend services",
                "improved": "Built Go services handling 10k req/s"
            }
        ],
        "verdict": {
            "suitability": "High",
            "nextSteps": ["Add a gRPC project"],
            "alternativeRoles": ["Platform engineer"]
        },
        "finalFeedback": {
            "topImprovements": ["Quantify impact", "Add gRPC"],
            "confidence": 85
        }
    }"#;
}
