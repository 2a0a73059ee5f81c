//! Best-effort contact extraction: email, phone, LinkedIn, GitHub.
//!
//! Every lookup degrades to an empty string when nothing matches; this
//! module never fails.

use linkify::{LinkFinder, LinkKind};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub github_url: String,
}

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// Phone shapes from strict to loose. A match only counts when it still has
/// at least [`MIN_PHONE_DIGITS`] digits after stripping punctuation, which
/// keeps years and zip codes out.
static PHONE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // +1 (555) 123-4567 and international variants
        Regex::new(r"\+\d{1,3}[-. ]?\(?\d{2,4}\)?[-. ]?\d{3,4}[-. ]?\d{3,4}").unwrap(),
        // (555) 123-4567 / 555.123.4567
        Regex::new(r"\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}").unwrap(),
        // any long run of digit-ish characters
        Regex::new(r"\+?[\d(][\d(). -]{8,}\d").unwrap(),
        // bare digit run
        Regex::new(r"\d{10,}").unwrap(),
    ]
});

const MIN_PHONE_DIGITS: usize = 10;

pub fn extract(text: &str) -> ContactInfo {
    ContactInfo {
        email: EMAIL_RE
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        phone: extract_phone(text).unwrap_or_default(),
        linkedin_url: find_profile_url(text, "linkedin.com", Some("/in/")).unwrap_or_default(),
        github_url: find_profile_url(text, "github.com", None).unwrap_or_default(),
    }
}

fn extract_phone(text: &str) -> Option<String> {
    for re in PHONE_RES.iter() {
        for m in re.find_iter(text) {
            let digits = m.as_str().chars().filter(char::is_ascii_digit).count();
            if digits >= MIN_PHONE_DIGITS {
                return Some(m.as_str().trim().to_string());
            }
        }
    }
    None
}

/// Scan the text for URL-shaped tokens (scheme optional, so bare
/// `linkedin.com/in/jane` mentions count) and keep the first one on the
/// wanted host. Bare matches are normalized to absolute `https://` URLs.
fn find_profile_url(text: &str, host: &str, path_hint: Option<&str>) -> Option<String> {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);
    finder.url_must_have_scheme(false);

    for link in finder.links(text) {
        let lower = link.as_str().to_lowercase();
        if !lower.contains(host) {
            continue;
        }
        if let Some(hint) = path_hint
            && !lower.contains(hint)
        {
            continue;
        }
        return Some(normalize_scheme(link.as_str()));
    }
    None
}

fn normalize_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email() {
        let info = extract("Jane Smith\njane.smith@example.com\n555-123-4567");
        assert_eq!(info.email, "jane.smith@example.com");
    }

    #[test]
    fn test_extract_phone_formats() {
        for text in [
            "+1 (555) 123-4567",
            "(555) 123-4567",
            "555.123.4567",
            "call 5551234567 anytime",
        ] {
            let info = extract(text);
            let digits = info.phone.chars().filter(|c| c.is_ascii_digit()).count();
            assert!(digits >= 10, "no phone found in {text:?}");
        }
    }

    #[test]
    fn test_short_digit_runs_are_not_phones() {
        // Years and a zip code, but nothing with ten digits in one run.
        let info = extract("Graduated 2015, Boston MA 02134");
        assert_eq!(info.phone, "");
    }

    #[test]
    fn test_linkedin_without_scheme_is_normalized() {
        let info = extract("Profile: linkedin.com/in/jane-smith");
        assert_eq!(info.linkedin_url, "https://linkedin.com/in/jane-smith");
    }

    #[test]
    fn test_github_with_scheme_is_kept() {
        let info = extract("Code at https://github.com/janesmith");
        assert_eq!(info.github_url, "https://github.com/janesmith");
    }

    #[test]
    fn test_linkedin_requires_profile_path() {
        // A bare company page is not a profile URL.
        let info = extract("See linkedin.com/company/acme");
        assert_eq!(info.linkedin_url, "");
    }

    #[test]
    fn test_missing_contact_fields_are_empty() {
        let info = extract("Jane Smith\nSoftware Engineer");
        assert_eq!(info, ContactInfo::default());
    }
}
