use std::fs;
use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::error::ExtractError;

/// Shortest run of printable characters worth keeping when scavenging text
/// out of a legacy `.doc` binary.
const MIN_DOC_RUN: usize = 4;

pub fn read_pdf(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|e| ExtractError::io(path, e))?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::extraction("pdf", e))
}

/// Walk the DOCX document tree and collect the text of every run, one
/// paragraph per line. Tables and headers are skipped; résumé bodies live in
/// plain paragraphs.
pub fn read_docx(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|e| ExtractError::io(path, e))?;
    let docx = docx_rs::read_docx(&bytes).map_err(|e| ExtractError::extraction("docx", e))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children.iter() {
        if let DocumentChild::Paragraph(para) = child {
            let text: String = para
                .children
                .iter()
                .filter_map(|pc| match pc {
                    ParagraphChild::Run(run) => Some(
                        run.children
                            .iter()
                            .filter_map(|rc| match rc {
                                RunChild::Text(t) => Some(t.text.clone()),
                                _ => None,
                            })
                            .collect::<Vec<_>>()
                            .join(""),
                    ),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("");
            if !text.is_empty() {
                paragraphs.push(text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Best-effort text scavenge for legacy `.doc` binaries. There is no crate
/// that reads the WordBinary format, so the bytes are decoded as
/// Windows-1252 and runs of printable characters are kept. Binary-only
/// files report `ExtractionFailed` like any other unreadable input.
pub fn read_doc(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|e| ExtractError::io(path, e))?;
    let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
    let text = printable_runs(&decoded);
    if text.trim().is_empty() {
        return Err(ExtractError::extraction(
            "doc",
            "no readable text in legacy binary",
        ));
    }
    Ok(text)
}

/// Read a plain-text file with charset detection, so Latin-1 and
/// Windows-1252 résumés decode instead of failing UTF-8 validation.
pub fn read_txt(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|e| ExtractError::io(path, e))?;

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(&bytes, true);
    let encoding = detector.guess(None, true);

    let (decoded, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(ExtractError::extraction(
            "txt",
            format!("failed to decode content as {}", encoding.name()),
        ));
    }
    Ok(decoded.into_owned())
}

fn printable_runs(decoded: &str) -> String {
    let mut runs: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in decoded.chars() {
        if c == '\n' || (!c.is_control() && c != '\u{FFFD}') {
            current.push(c);
        } else {
            flush_run(&mut runs, &mut current);
        }
    }
    flush_run(&mut runs, &mut current);

    runs.join("\n")
}

fn flush_run(runs: &mut Vec<String>, current: &mut String) {
    let run = std::mem::take(current);
    let trimmed = run.trim();
    if trimmed.len() >= MIN_DOC_RUN && trimmed.chars().any(|c| c.is_alphabetic()) {
        runs.push(trimmed.to_string());
    }
}
