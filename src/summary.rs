//! Professional summary: prefer the candidate's own words, synthesize from
//! extracted data otherwise.

use crate::model::Skill;
use crate::sections::{SUMMARY_HEADERS, section_lines};

/// An extracted summary shorter than this (in chars, same unit as the
/// truncation cap) is treated as noise and the synthesized fallback is used
/// instead.
const MIN_SUMMARY_LEN: usize = 20;

const TOP_SKILLS: usize = 5;

pub fn extract_or_synthesize(
    text: &str,
    skills: &[Skill],
    years_experience: u32,
    max_chars: usize,
) -> String {
    find_summary_section(text, max_chars).unwrap_or_else(|| synthesize(skills, years_experience))
}

fn find_summary_section(text: &str, max_chars: usize) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let body = section_lines(&lines, SUMMARY_HEADERS)?;

    let joined = body
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if joined.chars().count() > MIN_SUMMARY_LEN {
        Some(joined.chars().take(max_chars).collect())
    } else {
        None
    }
}

fn synthesize(skills: &[Skill], years_experience: u32) -> String {
    let specialization = if skills.is_empty() {
        "various technical skills".to_string()
    } else {
        skills
            .iter()
            .take(TOP_SKILLS)
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "Professional with {years_experience} years of experience specializing in {specialization}."
    )
}
