//! Regex heuristics for emails, phone numbers and proper names
//!
//! The patterns are intentionally loose. The email domain accepts runs of
//! dots (`a@b.c..d`), the phone pattern accepts any long enough digit run
//! with separators (ISBNs, numeric ranges) and the name pattern flags every
//! capitalized word, including sentence-initial ones.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9_.+\-]+@[a-zA-Z0-9\-]+\.[a-zA-Z0-9.\-]+").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\s()\-]{7,}\d").unwrap());

// One or two capitalized words; the character classes cover Spanish accents.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-ZÁÉÍÓÚÑ][a-záéíóúñ]{2,}(?:\s[A-ZÁÉÍÓÚÑ][a-záéíóúñ]{2,})?").unwrap()
});

/// Extract email addresses in order of appearance (duplicates kept)
pub fn extract_emails(text: &str) -> Vec<String> {
    find_all(&EMAIL_RE, text)
}

/// Extract phone-number candidates in order of appearance
///
/// A candidate is an optional `+`, a digit, at least seven digits, spaces,
/// parentheses or dashes, and a closing digit. Whitespace includes line
/// breaks, so a candidate may span two lines of the extracted text.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    find_all(&PHONE_RE, text)
}

/// Extract probable proper names: one or two consecutive capitalized words
///
/// Every occurrence is reported, so repeated names appear repeatedly.
pub fn extract_names(text: &str) -> Vec<String> {
    find_all(&NAME_RE, text)
}

fn find_all(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_requires_domain_tail() {
        let emails = extract_emails("contact: a.b@x.co and bad@");
        assert_eq!(emails, vec!["a.b@x.co"]);
    }

    #[test]
    fn test_email_keeps_duplicates_in_order() {
        let emails = extract_emails("b@y.org, a@x.com, b@y.org");
        assert_eq!(emails, vec!["b@y.org", "a@x.com", "b@y.org"]);
    }

    #[test]
    fn test_email_loose_domain() {
        // Consecutive dots are accepted in the domain tail
        let emails = extract_emails("mail a+b@host.c..d now");
        assert_eq!(emails, vec!["a+b@host.c..d"]);
    }

    #[test]
    fn test_phone_candidates() {
        let phones = extract_phone_numbers("call 123-456-7890 or +1 (800) 555-0199 today");
        assert_eq!(phones, vec!["123-456-7890", "+1 (800) 555-0199"]);
    }

    #[test]
    fn test_phone_too_short() {
        assert!(extract_phone_numbers("room 12-34, code 5551").is_empty());
    }

    #[test]
    fn test_phone_overmatches_isbn() {
        let phones = extract_phone_numbers("ISBN 978-3-16-148410-0");
        assert_eq!(phones, vec!["978-3-16-148410-0"]);
    }

    #[test]
    fn test_names_per_occurrence() {
        let names = extract_names("Hola mundo. Hola Python. Python es genial.");
        assert_eq!(names, vec!["Hola", "Hola Python", "Python"]);
    }

    #[test]
    fn test_names_accented() {
        let names = extract_names("La señora Ángela Muñoz llegó con Íñigo.");
        assert_eq!(names, vec!["Ángela Muñoz", "Íñigo"]);
    }

    #[test]
    fn test_names_need_three_letters() {
        assert!(extract_names("Yo y Al, ok").is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_emails("").is_empty());
        assert!(extract_phone_numbers("").is_empty());
        assert!(extract_names("").is_empty());
    }
}
