//! Heuristic name extraction from free-text résumé headers.
//!
//! Résumé headers are unstructured, so three independent strategies run in
//! strict order, short-circuiting on the first success:
//!
//! 1. scan the first lines of the document for a name-shaped line,
//! 2. look for an explicit `Name:` label or an isolated two-word line,
//! 3. fall back to the first capitalized word pair not in the stoplist.
//!
//! No strategy is retried, and the chain never fails: when everything
//! misses, both name parts come back empty.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullName {
    pub first: String,
    pub last: String,
}

impl FullName {
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.last.is_empty()
    }
}

const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 80;
const MAX_NAME_DIGITS: usize = 2;
const MAX_NAME_SPECIALS: usize = 2;

/// Lines that cannot be a header name: contact details, section headers,
/// separators, and lines that are themselves a job title.
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(https?://|www\.|linkedin\.com|github\.com|\.com/)").unwrap());
static SECTION_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(summary|objective|profile|skills|education|experience|employment|projects|certifications?|references|contact|about|overview|qualifications?)\b",
    )
    .unwrap()
});
static JOB_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:(?:senior|junior|lead|principal|staff|chief|head|associate|full[- ]stack|front[- ]end|back[- ]end|software|web|mobile|data|cloud|devops|qa|ux|ui)\s+)*(?:developer|engineer|manager|designer|analyst|consultant|architect|administrator|specialist|scientist|programmer|intern)\.?$",
    )
    .unwrap()
});

/// Name-shaped line patterns, strictest first: ALL-CAPS, Proper-Case, loose
/// mixed case, hyphen/apostrophe-aware.
static NAME_SHAPES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^([A-Z]{2,}(?:\s+[A-Z]\.?)*(?:\s+[A-Z]{2,})+)$").unwrap(),
        Regex::new(r"^([A-Z][a-z]+(?:\s+[A-Z]\.?)*(?:\s+[A-Z][a-z]+)+)$").unwrap(),
        Regex::new(r"^([A-Za-z][a-zA-Z.]*(?:\s+[A-Za-z][a-zA-Z.]*){1,3})$").unwrap(),
        Regex::new(r"^([A-Z][a-zA-Z'\-]+(?:\s+[A-Z][a-zA-Z'\-]+)+)$").unwrap(),
    ]
});

static NAME_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bname\s*[:\-]\s*([A-Z][a-zA-Z'\-]+(?:\s+[A-Z][a-zA-Z'\-.]+){1,2}?)")
        .unwrap()
});
static ISOLATED_CAPS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2,}\s+[A-Z]{2,}$").unwrap());
static ISOLATED_PROPER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+\s+[A-Z][a-z]+$").unwrap());

static CAPITALIZED_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z'\-]*$").unwrap());

/// Common résumé words that disqualify a word-pair candidate in the
/// last-resort strategy.
const STOPWORDS: &[&str] = &[
    "resume", "curriculum", "vitae", "summary", "objective", "profile", "skills", "skill",
    "education", "experience", "work", "employment", "history", "professional", "contact",
    "email", "phone", "address", "references", "projects", "certifications", "languages",
    "developer", "engineer", "manager", "designer", "analyst", "consultant", "architect",
    "administrator", "specialist", "scientist", "programmer", "intern", "senior", "junior",
    "lead", "principal", "staff", "software", "technical", "university", "college",
    "institute", "school", "academy", "bachelor", "master", "present", "current", "page",
    "the", "and", "for", "with", "from", "january", "february", "march", "april", "may",
    "june", "july", "august", "september", "october", "november", "december",
];

/// Run the strategy chain over raw résumé text. `scan_lines` bounds how many
/// non-empty header lines the first strategy examines.
pub fn extract(text: &str, scan_lines: usize) -> FullName {
    scan_header_lines(text, scan_lines)
        .or_else(|| scan_labeled_or_isolated(text))
        .or_else(|| scan_word_pairs(text))
        .unwrap_or_default()
}

/// Strategy 1: the name is usually one of the first lines of the document.
/// Skip lines that are obviously something else and try the shape cascade on
/// the first survivor only.
fn scan_header_lines(text: &str, scan_lines: usize) -> Option<FullName> {
    let candidate = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(scan_lines)
        .find(|line| !is_excluded_line(line))?;
    parse_name_line(candidate)
}

/// Strategy 2: an explicit `Name: ...` label (searched with newlines
/// flattened to spaces), or a standalone two-word all-caps / proper-case
/// line anywhere in the document.
fn scan_labeled_or_isolated(text: &str) -> Option<FullName> {
    let flat = text.replace('\n', " ");
    if let Some(cap) = NAME_LABEL_RE.captures(&flat)
        && let Some(name) = parse_name_line(cap[1].trim())
    {
        return Some(name);
    }

    text.lines()
        .map(str::trim)
        .filter(|line| ISOLATED_CAPS_RE.is_match(line) || ISOLATED_PROPER_RE.is_match(line))
        .find_map(parse_name_line)
}

/// Strategy 3: first consecutive pair of capitalized words with neither word
/// in the stoplist.
fn scan_word_pairs(text: &str) -> Option<FullName> {
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|w| CAPITALIZED_WORD_RE.is_match(w))
        .collect();

    words.windows(2).find_map(|pair| {
        let (a, b) = (pair[0], pair[1]);
        if is_stopword(a) || is_stopword(b) {
            return None;
        }
        Some(FullName {
            first: proper_case_token(a),
            last: proper_case_token(b),
        })
    })
}

fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word.to_lowercase().as_str())
}

fn is_excluded_line(line: &str) -> bool {
    let digits = line.chars().filter(|c| c.is_ascii_digit()).count();
    line.contains('@')
        || URL_RE.is_match(line)
        || digits >= 7
        || line.chars().all(|c| c.is_ascii_digit())
        || !line.chars().any(char::is_alphanumeric)
        || SECTION_WORD_RE.is_match(line)
        || JOB_TITLE_RE.is_match(line)
}

/// Try the shape cascade on a single line, validate the candidate, and
/// normalize it to proper case.
fn parse_name_line(line: &str) -> Option<FullName> {
    for shape in NAME_SHAPES.iter() {
        if let Some(cap) = shape.captures(line) {
            let candidate = cap[1].trim();
            if is_plausible_name(candidate) {
                return Some(split_name(candidate));
            }
        }
    }
    None
}

fn is_plausible_name(candidate: &str) -> bool {
    let parts = candidate.split_whitespace().count();
    let digits = candidate.chars().filter(|c| c.is_ascii_digit()).count();
    let specials = candidate
        .chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace() && !matches!(c, '.' | '\'' | '-'))
        .count();

    parts >= 2
        && (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&candidate.len())
        && digits <= MAX_NAME_DIGITS
        && specials <= MAX_NAME_SPECIALS
}

fn split_name(candidate: &str) -> FullName {
    let tokens: Vec<String> = candidate
        .split_whitespace()
        .map(proper_case_token)
        .collect();
    FullName {
        first: tokens.first().cloned().unwrap_or_default(),
        last: tokens[1..].join(" "),
    }
}

/// Proper-case one name token. Tokens of one or two letters carrying a dot
/// are initials and stay fully uppercase; hyphens and apostrophes restart
/// capitalization ("mary-jane o'brien" -> "Mary-Jane O'Brien").
fn proper_case_token(token: &str) -> String {
    let bare = token.trim_matches('.');
    if token.contains('.') && bare.len() <= 2 {
        return token.to_uppercase();
    }

    let mut out = String::with_capacity(token.len());
    let mut at_boundary = true;
    for c in token.chars() {
        if c == '-' || c == '\'' {
            out.push(c);
            at_boundary = true;
        } else if at_boundary {
            out.extend(c.to_uppercase());
            at_boundary = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
