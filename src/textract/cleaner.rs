use once_cell::sync::Lazy;
use regex::Regex;

static HORIZONTAL_WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static SPLIT_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])\n([a-z])").unwrap());

/// Cleanup applied to text from every format: normalize line endings,
/// collapse horizontal whitespace, trim each line, and cap blank runs at one
/// empty line so paragraph breaks survive.
///
/// Each pass is a fixed point, so cleaning already-cleaned text is a no-op.
pub fn clean_text(raw: &str) -> String {
    let text = normalize_line_endings(raw);
    let text = collapse_spaces(&text);
    let text = trim_lines(&text);
    collapse_blank_runs(&text)
}

/// PDF-specific cleanup. PDF extraction splits words across line breaks and
/// leaves layout junk, so on top of the common passes this rejoins
/// lowercase fragments separated by a newline and drops lines with no
/// alphanumeric content.
///
/// Junk lines are dropped before rejoining; otherwise removing a blank line
/// would create a fresh lowercase seam and a second cleaning pass would
/// merge words the first one left apart.
pub fn clean_pdf_text(raw: &str) -> String {
    let text = normalize_line_endings(raw);
    let text = collapse_spaces(&text);
    let text = trim_lines(&text);
    let text = drop_junk_lines(&text);
    let text = rejoin_split_words(&text);
    collapse_blank_runs(&text)
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn collapse_spaces(text: &str) -> String {
    HORIZONTAL_WS_RE.replace_all(text, " ").into_owned()
}

fn trim_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn collapse_blank_runs(text: &str) -> String {
    BLANK_RUN_RE.replace_all(text, "\n\n").into_owned()
}

/// Drop lines that are empty or carry no alphanumeric character at all
/// (rule lines, stray bullets, page decorations).
fn drop_junk_lines(text: &str) -> String {
    text.lines()
        .filter(|line| line.chars().any(char::is_alphanumeric))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rejoin words the PDF extractor broke across a line break: a lowercase
/// letter, a newline, then another lowercase letter is one split word.
/// Runs to a fixed point because `replace_all` consumes the second letter
/// and can miss a seam it just created.
fn rejoin_split_words(text: &str) -> String {
    let mut out = text.to_string();
    while SPLIT_WORD_RE.is_match(&out) {
        out = SPLIT_WORD_RE.replace_all(&out, "$1$2").into_owned();
    }
    out
}
