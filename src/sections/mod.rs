//! Shared section-boundary logic for the labeled résumé sections.
//!
//! A section starts at the first line matching one of its header keywords
//! and ends at the first later line that is a header of any *other* section
//! (or end of document). Extractors only ever see the lines strictly between
//! those boundaries.

pub mod education;
pub mod experience;
pub mod skills;

pub(crate) const SKILL_HEADERS: &[&str] = &["technical skills", "core competencies", "skills"];
pub(crate) const EDUCATION_HEADERS: &[&str] = &["education", "academic", "qualification"];
pub(crate) const EXPERIENCE_HEADERS: &[&str] = &[
    "work experience",
    "professional experience",
    "employment history",
    "work history",
    "employment",
    "experience",
];
pub(crate) const SUMMARY_HEADERS: &[&str] =
    &["summary", "objective", "profile", "about", "overview"];

const ALL_HEADER_GROUPS: &[&[&str]] = &[
    SKILL_HEADERS,
    EDUCATION_HEADERS,
    EXPERIENCE_HEADERS,
    SUMMARY_HEADERS,
];

/// Headers are short labels, not prose. Anything longer than this cannot
/// end or start a section even if it mentions a keyword.
const MAX_HEADER_LINE_LEN: usize = 40;

pub(crate) fn is_header_line(line: &str, keywords: &[&str]) -> bool {
    let lower = line.trim().trim_end_matches(':').trim().to_lowercase();
    if lower.is_empty() || lower.len() > MAX_HEADER_LINE_LEN {
        return false;
    }
    keywords.iter().any(|k| lower.contains(k))
}

// Groups are identified by content, not address: the header tables are
// `const` items, so every use site gets its own promoted copy and pointer
// identity does not hold across modules.
fn is_other_header(line: &str, own: &[&str]) -> bool {
    ALL_HEADER_GROUPS
        .iter()
        .filter(|&&group| group != own)
        .any(|group| is_header_line(line, group))
}

/// Locate the body of the section labeled by `own`, as the slice of lines
/// strictly between its header and the next other-section header.
pub(crate) fn section_lines<'a>(lines: &[&'a str], own: &[&str]) -> Option<Vec<&'a str>> {
    let start = lines.iter().position(|l| is_header_line(l, own))?;
    let body = &lines[start + 1..];
    let end = body
        .iter()
        .position(|l| is_other_header(l, own))
        .unwrap_or(body.len());
    Some(body[..end].to_vec())
}
