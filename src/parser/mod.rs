//! Top-level orchestration: one file in, one structured record out.

#[cfg(test)]
mod tests;

use std::path::Path;

use chrono::{Datelike, Utc};
use tracing::{debug, info, instrument, warn};

use crate::model::{ParseFailure, ParseOutcome, ParsedResume};
use crate::{contact, name, sections, summary, textract};

/// Knobs for a parse call. The defaults match the production behavior;
/// `current_year` exists so tests can pin the "Present" resolution used by
/// the experience aggregator.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// How many non-empty header lines the name line-scan examines.
    pub header_scan_lines: usize,
    /// Extracted summaries are truncated to this many characters.
    pub summary_max_chars: usize,
    /// Overrides the wall-clock year when resolving open-ended date ranges.
    pub current_year: Option<i32>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            header_scan_lines: 20,
            summary_max_chars: 500,
            current_year: None,
        }
    }
}

/// Parse a résumé file into a [`ParseOutcome`] with default options.
///
/// This never returns an error and never panics: extraction failures are
/// converted into the `{parsing_error, parsed_at}` record and everything
/// downstream of extraction is infallible by construction.
pub fn parse_file(path: impl AsRef<Path>) -> ParseOutcome {
    parse_file_with(path.as_ref(), &ParseOptions::default())
}

#[instrument(skip(options), fields(path = %path.display()))]
pub fn parse_file_with(path: &Path, options: &ParseOptions) -> ParseOutcome {
    match textract::extract_file(path) {
        Ok(text) => {
            let resume = parse_text(&text, options);
            info!(
                skills = resume.skills.len(),
                education = resume.education.len(),
                work_experience = resume.work_experience.len(),
                years = resume.years_experience,
                "parsed resume"
            );
            ParseOutcome::Complete(resume)
        }
        Err(err) => {
            warn!(error = %err, "resume parsing failed");
            ParseOutcome::Failed(ParseFailure {
                parsing_error: err.to_string(),
                parsed_at: Utc::now(),
            })
        }
    }
}

/// The infallible tail of the pipeline, for callers that already hold the
/// extracted text. Extractors run in sequence and each degrades to an empty
/// value on its own; only the summary step depends on earlier outputs
/// (skills and aggregate years).
pub fn parse_text(text: &str, options: &ParseOptions) -> ParsedResume {
    let full_name = name::extract(text, options.header_scan_lines);
    let contact_info = contact::extract(text);
    let skills = sections::skills::extract(text);
    let education = sections::education::extract(text);
    let work_experience = sections::experience::extract(text);

    let current_year = options.current_year.unwrap_or_else(|| Utc::now().year());
    let years_experience = sections::experience::total_years(&work_experience, current_year);
    let summary =
        summary::extract_or_synthesize(text, &skills, years_experience, options.summary_max_chars);

    debug!(
        name_found = !full_name.is_empty(),
        email_found = !contact_info.email.is_empty(),
        "extraction passes complete"
    );

    ParsedResume {
        first_name: full_name.first,
        last_name: full_name.last,
        phone: contact_info.phone,
        email: contact_info.email,
        linkedin_url: contact_info.linkedin_url,
        github_url: contact_info.github_url,
        skills,
        education,
        work_experience,
        years_experience,
        summary,
        parsed_at: Utc::now(),
    }
}
