use std::fs;
use std::path::PathBuf;

use chrono::{Datelike, Utc};

use crate::model::Proficiency;
use crate::parser::{ParseOptions, parse_file, parse_file_with, parse_text};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/parser/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

fn pinned_options(current_year: i32) -> ParseOptions {
    ParseOptions {
        current_year: Some(current_year),
        ..ParseOptions::default()
    }
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cvparse-parser-{name}"));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_jane_smith_scenario() {
    let text = fixture("jane_smith.txt");
    let resume = parse_text(&text, &ParseOptions::default());

    assert_eq!(resume.first_name, "Jane");
    assert_eq!(resume.last_name, "Smith");
    assert_eq!(resume.email, "jane.smith@example.com");

    assert_eq!(resume.skills.len(), 1);
    assert_eq!(resume.skills[0].name, "Python");
    assert_eq!(resume.skills[0].proficiency, Proficiency::Expert);
    assert_eq!(resume.skills[0].years_experience, 6);

    assert_eq!(resume.education.len(), 1);
    assert_eq!(resume.education[0].degree, "Bachelor of Science");
    assert_eq!(resume.education[0].field, Some("Computer Science".to_string()));
    assert_eq!(resume.education[0].institution, Some("MIT University".to_string()));
    assert_eq!(resume.education[0].year, Some(2015));
}

#[test]
fn test_full_resume_pipeline() {
    let text = fixture("full_resume.txt");
    let resume = parse_text(&text, &pinned_options(2025));

    assert_eq!(resume.first_name, "John");
    assert_eq!(resume.last_name, "O'Connor");
    assert_eq!(resume.email, "john.oconnor@example.com");
    assert_eq!(resume.phone, "(555) 123-4567");
    assert_eq!(resume.linkedin_url, "https://linkedin.com/in/john-oconnor");
    assert_eq!(resume.github_url, "https://github.com/joconnor");

    assert_eq!(resume.skills.len(), 3);
    assert_eq!(resume.education.len(), 1);

    assert_eq!(resume.work_experience.len(), 2);
    let senior = &resume.work_experience[0];
    assert_eq!(senior.title, "Senior Software Engineer");
    assert_eq!(senior.company, Some("Acme Payments Inc.".to_string()));
    assert_eq!(senior.start_date, Some("Jan 2019".to_string()));
    assert_eq!(senior.end_date, Some("Present".to_string()));
    assert!(senior.description.contains("settlement pipeline"));

    // 2019..2025 open-ended plus 2014..2019.
    assert_eq!(resume.years_experience, 11);

    assert!(resume.summary.starts_with("Backend engineer with a decade"));
}

#[test]
fn test_name_label_fallback_fires_after_line_scan() {
    let text = fixture("noisy_header.txt");
    let resume = parse_text(&text, &ParseOptions::default());
    assert_eq!(resume.first_name, "Jane");
    assert_eq!(resume.last_name, "Doe");
}

#[test]
fn test_summary_synthesized_when_section_missing() {
    let text = fixture("jane_smith.txt");
    let resume = parse_text(&text, &ParseOptions::default());
    assert_eq!(
        resume.summary,
        "Professional with 0 years of experience specializing in Python."
    );
}

#[test]
fn test_every_field_present_on_sparse_input() {
    let resume = parse_text("just one line of text", &ParseOptions::default());
    let json = serde_json::to_value(&resume).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 12);
    assert_eq!(obj["first_name"], "");
    assert_eq!(obj["skills"].as_array().unwrap().len(), 0);
    assert_eq!(obj["years_experience"], 0);
}

#[test]
fn test_parse_file_success_outcome() {
    let path = temp_file("ok.txt", &fixture("jane_smith.txt"));
    let outcome = parse_file(&path);
    let resume = outcome.resume().expect("expected a parsed resume");
    assert_eq!(resume.first_name, "Jane");
    let _ = fs::remove_file(path);
}

#[test]
fn test_unsupported_format_becomes_parsing_error() {
    let outcome = parse_file("/nonexistent/resume.xyz");
    let error = outcome.error().expect("expected a failure record");
    assert!(error.contains("unsupported format"));
}

#[test]
fn test_whitespace_only_file_becomes_parsing_error() {
    let path = temp_file("blank.txt", " \n \t \n");
    let outcome = parse_file(&path);
    assert!(outcome.resume().is_none());
    let json = serde_json::to_value(&outcome).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert!(obj.contains_key("parsing_error"));
    assert!(obj.contains_key("parsed_at"));
    let _ = fs::remove_file(path);
}

#[test]
fn test_wall_clock_year_used_when_not_pinned() {
    let text = "EXPERIENCE\nSoftware Engineer\n2020 - Present";
    let resume = parse_text(text, &ParseOptions::default());
    let expected = (Utc::now().year() - 2020).max(0) as u32;
    assert_eq!(resume.years_experience, expected);
}

#[test]
fn test_parse_file_with_pinned_year() {
    let path = temp_file(
        "pinned.txt",
        "EXPERIENCE\nSoftware Engineer\n2020 - Present",
    );
    let outcome = parse_file_with(&path, &pinned_options(2030));
    assert_eq!(outcome.resume().unwrap().years_experience, 10);
    let _ = fs::remove_file(path);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_parse_text_never_panics(text in ".*") {
            let _ = parse_text(&text, &ParseOptions::default());
        }

        #[test]
        fn test_parse_text_always_serializes(text in "\\PC*") {
            let resume = parse_text(&text, &ParseOptions::default());
            prop_assert!(serde_json::to_string(&resume).is_ok());
        }
    }
}
