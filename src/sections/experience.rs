use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::WorkExperience;
use crate::sections::{EXPERIENCE_HEADERS, section_lines};

/// Role nouns that mark a job-title line. Singular on purpose: "engineers"
/// in a description sentence is not a title.
static ROLE_NOUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(developer|engineer|manager|designer|analyst|consultant|architect|administrator|specialist|scientist|director|officer|intern|lead)\b",
    )
    .unwrap()
});

/// Date range captured verbatim: `Month YYYY - Month YYYY|Present`, with
/// bare years allowed on either side. Nothing is normalized to calendar
/// dates.
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{4}|\d{4})\s*(?:-|–|—|to)\s*((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{4}|\d{4}|present|current)",
    )
    .unwrap()
});

static COMPANY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9 .,&'\-]{1,59}$").unwrap());

static YEAR_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b((?:19|20)\d{2})\b").unwrap());
static PRESENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(present|current)\b").unwrap());

const MAX_TITLE_LEN: usize = 60;
const MAX_TITLE_WORDS: usize = 6;
const MAX_COMPANY_WORDS: usize = 6;
const MIN_DESCRIPTION_LEN: usize = 10;

/// Fold the work-history section into entries. A job-title line flushes the
/// entry in progress (attaching its accumulated description) and starts a
/// new one; other lines fill the open entry's company, date range, or
/// description.
pub fn extract(text: &str) -> Vec<WorkExperience> {
    let lines: Vec<&str> = text.lines().collect();
    let Some(body) = section_lines(&lines, EXPERIENCE_HEADERS) else {
        return Vec::new();
    };

    let mut entries: Vec<WorkExperience> = Vec::new();
    let mut current: Option<WorkExperience> = None;
    let mut description: Vec<String> = Vec::new();

    for line in body.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        if is_title_line(line) {
            flush(&mut entries, current.take(), &mut description);
            current = Some(WorkExperience {
                title: line.to_string(),
                company: None,
                start_date: None,
                end_date: None,
                description: String::new(),
            });
            continue;
        }

        let Some(entry) = current.as_mut() else {
            continue;
        };

        if entry.company.is_none() && is_company_line(line) {
            entry.company = Some(line.to_string());
        } else if let Some(cap) = DATE_RANGE_RE.captures(line) {
            if entry.start_date.is_none() {
                entry.start_date = Some(cap[1].to_string());
                entry.end_date = Some(cap[2].to_string());
            }
        } else if is_description_line(line) {
            description.push(line.to_string());
        }
    }

    flush(&mut entries, current.take(), &mut description);
    entries
}

fn flush(
    entries: &mut Vec<WorkExperience>,
    current: Option<WorkExperience>,
    description: &mut Vec<String>,
) {
    if let Some(mut entry) = current {
        entry.description = std::mem::take(description).join("\n");
        entries.push(entry);
    } else {
        description.clear();
    }
}

fn is_title_line(line: &str) -> bool {
    line.len() <= MAX_TITLE_LEN
        && line.split_whitespace().count() <= MAX_TITLE_WORDS
        && line.starts_with(|c: char| c.is_uppercase())
        && ROLE_NOUN_RE.is_match(line)
        && !DATE_RANGE_RE.is_match(line)
}

fn is_company_line(line: &str) -> bool {
    !looks_like_date(line)
        && !line.to_lowercase().contains("present")
        && line.split_whitespace().count() <= MAX_COMPANY_WORDS
        && COMPANY_RE.is_match(line)
}

fn looks_like_date(line: &str) -> bool {
    DATE_RANGE_RE.is_match(line) || YEAR_TOKEN_RE.is_match(line)
}

fn is_description_line(line: &str) -> bool {
    line.starts_with('-')
        || line.starts_with('•')
        || line.starts_with('*')
        || line.len() > MIN_DESCRIPTION_LEN
}

/// Sum the span of every entry with parseable years: `max(0, end - start)`,
/// where an end of "Present"/"Current" resolves to `current_year`. Entries
/// without usable years contribute nothing. This is a plain sum, not an
/// interval union, so overlapping jobs double-count.
pub fn total_years(entries: &[WorkExperience], current_year: i32) -> u32 {
    entries
        .iter()
        .filter_map(|entry| {
            let start = first_year(entry.start_date.as_deref()?)?;
            let end_date = entry.end_date.as_deref()?;
            let end = if PRESENT_RE.is_match(end_date) {
                current_year
            } else {
                first_year(end_date)?
            };
            Some((end - start).max(0) as u32)
        })
        .sum()
}

fn first_year(date: &str) -> Option<i32> {
    YEAR_TOKEN_RE
        .captures(date)
        .and_then(|cap| cap[1].parse().ok())
}
