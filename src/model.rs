use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Skill mastery levels recognized by the skills section parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    /// Case-insensitive parse of a proficiency word. Anything outside the
    /// fixed set is rejected, which keeps the skills parser strict.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: Proficiency,
    pub years_experience: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub field: Option<String>,
    pub institution: Option<String>,
    pub year: Option<i32>,
}

/// One work-history entry. Dates stay as the free-text tokens that were
/// captured from the résumé; they are not normalized to calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub title: String,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: String,
}

/// The structured record produced by one parse call.
///
/// Every field is always present when serialized: extractors that find
/// nothing leave an empty string, empty vec, or zero rather than omitting
/// the key. The record is immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub skills: Vec<Skill>,
    pub education: Vec<EducationEntry>,
    pub work_experience: Vec<WorkExperience>,
    pub years_experience: u32,
    pub summary: String,
    pub parsed_at: DateTime<Utc>,
}

/// Hard-failure record: carries only the error message and the timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseFailure {
    pub parsing_error: String,
    pub parsed_at: DateTime<Utc>,
}

/// What a parse call hands back to the caller. Serializes untagged, so the
/// success shape and the `{parsing_error, parsed_at}` shape are both flat
/// JSON objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParseOutcome {
    Complete(ParsedResume),
    Failed(ParseFailure),
}

impl ParseOutcome {
    pub fn resume(&self) -> Option<&ParsedResume> {
        match self {
            Self::Complete(resume) => Some(resume),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Complete(_) => None,
            Self::Failed(failure) => Some(&failure.parsing_error),
        }
    }
}
