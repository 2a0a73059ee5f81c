//! Résumé text-extraction engine.
//!
//! Takes a résumé file (PDF, DOCX, legacy DOC, or plain text), pulls the
//! plain text out of it, and runs a set of regex-driven heuristics over that
//! text to produce a structured [`ParsedResume`]: name, contact details,
//! skills, education, work history, aggregate years of experience, and a
//! professional summary.
//!
//! The pipeline is deliberately lenient. Only text extraction can fail;
//! every heuristic downstream degrades to an empty value when it finds
//! nothing, so [`parse_file`] always returns a serializable record.

pub mod contact;
pub mod error;
pub mod model;
pub mod name;
pub mod parser;
pub mod sections;
pub mod summary;
pub mod textract;

pub use error::ExtractError;
pub use model::{
    EducationEntry, ParseFailure, ParseOutcome, ParsedResume, Proficiency, Skill, WorkExperience,
};
pub use parser::{ParseOptions, parse_file, parse_file_with, parse_text};
