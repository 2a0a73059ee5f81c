use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Proficiency, Skill};
use crate::sections::{SKILL_HEADERS, section_lines};

/// The one line shape the skills section accepts:
/// `Name - ProficiencyWord - N years`. Lines that deviate from it are
/// silently skipped; there is no partial-credit parsing.
static SKILL_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.+?)\s*-\s*(beginner|intermediate|advanced|expert)\s*-\s*(\d+)\s*years?$")
        .unwrap()
});

pub fn extract(text: &str) -> Vec<Skill> {
    let lines: Vec<&str> = text.lines().collect();
    let Some(body) = section_lines(&lines, SKILL_HEADERS) else {
        return Vec::new();
    };

    body.iter()
        .filter_map(|line| parse_skill_line(line.trim()))
        .collect()
}

fn parse_skill_line(line: &str) -> Option<Skill> {
    let cap = SKILL_LINE_RE.captures(line)?;
    let proficiency = Proficiency::from_word(&cap[2])?;
    let years_experience: u32 = cap[3].parse().ok()?;
    Some(Skill {
        name: cap[1].trim().to_string(),
        proficiency,
        years_experience,
    })
}
