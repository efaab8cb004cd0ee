//! Noise detection: greetings, store contact lines, timestamps, separators.

use super::patterns::{NOISE_KEYWORDS, SEPARATOR, TIMESTAMP};

/// Check whether a line carries no receipt data.
pub fn is_noise(line: &str) -> bool {
    if line == SEPARATOR || TIMESTAMP.is_match(line) {
        return true;
    }

    let lower = line.to_lowercase();
    NOISE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_any_case() {
        assert!(is_noise("Thank You for shopping!"));
        assert!(is_noise("VISIT US AGAIN"));
        assert!(is_noise("Phone: 555-0100"));
        assert!(is_noise("Please revisit"));
    }

    #[test]
    fn test_timestamp() {
        assert!(is_noise("3:45 PM"));
        assert!(is_noise("Time 11:02 AM"));
        assert!(!is_noise("3:45 pm"));
        assert!(!is_noise("15:45"));
    }

    #[test]
    fn test_separator_must_be_exact() {
        assert!(is_noise("-"));
        assert!(!is_noise("--"));
        assert!(!is_noise("- Coffee"));
    }

    #[test]
    fn test_regular_lines() {
        assert!(!is_noise("2x Coffee"));
        assert!(!is_noise("$6.00"));
        assert!(!is_noise("Jan 5, 2024"));
    }
}
