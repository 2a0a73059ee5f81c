use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::EducationEntry;
use crate::sections::{EDUCATION_HEADERS, section_lines};

/// A degree keyword opens a new entry. The first capture is the degree
/// itself ("Bachelor of Science", "PhD", "MBA"), the remainder of the line
/// becomes the field of study when present.
static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^((?:bachelor|master|doctor|associate)(?:\s+of\s+[a-z]+)?|ph\.?\s?d\.?|b\.?\s?(?:s|a|sc|e|tech)\.?|m\.?\s?(?:s|a|sc|e|tech)\.?|mba|diploma)\b[\s,:-]*(?:of|in)?\s*(.*)$",
    )
    .unwrap()
});

/// Institution lines name a university/college/school, optionally trailing
/// a 4-digit year after a dash or comma.
static INSTITUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(.*\b(?:university|college|institute|school|academy)\b.*?)(?:\s*[-–—,]\s*((?:19|20)\d{2}))?$",
    )
    .unwrap()
});

static BARE_YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^((?:19|20)\d{2})$").unwrap());

/// Fold the education section into entries: a degree line starts a new
/// entry (flushing the previous one), institution and year lines fill
/// whichever fields of the open entry are still empty, and the end of the
/// section flushes the last open entry.
pub fn extract(text: &str) -> Vec<EducationEntry> {
    let lines: Vec<&str> = text.lines().collect();
    let Some(body) = section_lines(&lines, EDUCATION_HEADERS) else {
        return Vec::new();
    };

    let mut entries: Vec<EducationEntry> = Vec::new();
    let mut current: Option<EducationEntry> = None;

    for line in body.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        if let Some(cap) = DEGREE_RE.captures(line) {
            if let Some(done) = current.take() {
                entries.push(done);
            }
            let field = cap
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            current = Some(EducationEntry {
                degree: cap[1].trim().to_string(),
                field,
                institution: None,
                year: None,
            });
        } else if let Some(entry) = current.as_mut() {
            fill_from_line(entry, line);
        }
    }

    if let Some(done) = current.take() {
        entries.push(done);
    }
    entries
}

fn fill_from_line(entry: &mut EducationEntry, line: &str) {
    if let Some(cap) = INSTITUTION_RE.captures(line) {
        if entry.institution.is_none() {
            entry.institution = Some(cap[1].trim().to_string());
        }
        if entry.year.is_none()
            && let Some(year) = cap.get(2)
        {
            entry.year = year.as_str().parse().ok();
        }
    } else if entry.year.is_none()
        && let Some(cap) = BARE_YEAR_RE.captures(line)
    {
        entry.year = cap[1].parse().ok();
    }
}
