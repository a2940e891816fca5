// src/marker/classify.rs
// =============================================================================
// Decides what a README body is.
//
// Rules, first match wins:
//   1. contains a decoy phrase (any case)        -> Decoy
//   2. >= 32 chars, only hex digits + whitespace -> Candidate
//   3. strictly between 10 and 100 chars         -> Suspicious
//   4. anything else                             -> Irrelevant
//
// The body is trimmed before any of this. Lengths are counted in chars.
// =============================================================================

use serde::Serialize;

/// Phrases planted in the decoy READMEs. Matched case-insensitively.
pub const DECOY_PHRASES: &[&str] = &[
    "veux de l'aide",
    "voisin",
    "droite",
    "gauche",
    "moi aussi",
    "toujours pas",
    "non",
];

/// Minimum length of a hex-shaped token.
pub const TOKEN_MIN_LEN: usize = 32;

/// Suspicious text is longer than this...
pub const SUSPICIOUS_MIN_LEN: usize = 10;

/// ...and shorter than this.
pub const SUSPICIOUS_MAX_LEN: usize = 100;

/// How much of a suspicious body gets printed.
pub const PREVIEW_LEN: usize = 50;

/// What a README turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Decoy,
    Candidate(String),
    Suspicious(String),
    Irrelevant,
}

/// The two kinds of README content worth reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Candidate,
    Suspicious,
}

pub fn classify(body: &str) -> Classification {
    let content = body.trim();

    if is_decoy(content) {
        return Classification::Decoy;
    }

    let len = content.chars().count();

    if len >= TOKEN_MIN_LEN && is_hex_shaped(content) {
        Classification::Candidate(content.to_string())
    } else if len > SUSPICIOUS_MIN_LEN && len < SUSPICIOUS_MAX_LEN {
        Classification::Suspicious(content.to_string())
    } else {
        Classification::Irrelevant
    }
}

fn is_decoy(content: &str) -> bool {
    let lowered = content.to_lowercase();
    DECOY_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}

// Hex digits in either case, plus the whitespace a token may be wrapped with
fn is_hex_shaped(content: &str) -> bool {
    content
        .chars()
        .all(|c| c.is_ascii_hexdigit() || matches!(c, ' ' | '\n' | '\r'))
}

/// First PREVIEW_LEN chars of `content`, for log lines.
pub fn preview(content: &str) -> String {
    content.chars().take(PREVIEW_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4";

    #[test]
    fn test_decoy_phrases() {
        assert_eq!(classify("Non ce n'est toujours pas ici"), Classification::Decoy);
        assert_eq!(classify("Demande à ton VOISIN du dessus"), Classification::Decoy);
        assert_eq!(classify("Tu veux de l'aide ? Moi aussi !"), Classification::Decoy);
        assert_eq!(classify("Non merci voisin"), Classification::Decoy);
    }

    #[test]
    fn test_decoy_wins_over_hex_shape() {
        // "non" hidden inside an otherwise perfect token
        let body = format!("{}non", TOKEN);
        assert_eq!(classify(&body), Classification::Decoy);
    }

    #[test]
    fn test_candidate_token() {
        assert_eq!(classify(TOKEN), Classification::Candidate(TOKEN.to_string()));
    }

    #[test]
    fn test_candidate_is_trimmed() {
        let body = format!("\n  {}\r\n", TOKEN);
        assert_eq!(classify(&body), Classification::Candidate(TOKEN.to_string()));
    }

    #[test]
    fn test_candidate_uppercase_and_inner_whitespace() {
        let body = "ABCDEF0123456789 ABCDEF0123456789\nABCDEF";
        assert_eq!(classify(body), Classification::Candidate(body.to_string()));
    }

    #[test]
    fn test_short_hex_is_suspicious_not_candidate() {
        // 31 hex chars: too short for a token, long enough to look odd
        let body = &TOKEN[..31];
        assert_eq!(classify(body), Classification::Suspicious(body.to_string()));
    }

    #[test]
    fn test_long_hex_over_suspicious_range_is_still_candidate() {
        let body = "f".repeat(150);
        assert_eq!(classify(&body), Classification::Candidate(body.clone()));
    }

    #[test]
    fn test_suspicious_text() {
        let body = "look somewhere else, maybe";
        assert_eq!(classify(body), Classification::Suspicious(body.to_string()));
    }

    #[test]
    fn test_suspicious_bounds_are_exclusive() {
        assert_eq!(classify(&"x".repeat(10)), Classification::Irrelevant);
        assert!(matches!(classify(&"x".repeat(11)), Classification::Suspicious(_)));
        assert!(matches!(classify(&"x".repeat(99)), Classification::Suspicious(_)));
        assert_eq!(classify(&"x".repeat(100)), Classification::Irrelevant);
    }

    #[test]
    fn test_irrelevant() {
        assert_eq!(classify(""), Classification::Irrelevant);
        assert_eq!(classify("   \n  "), Classification::Irrelevant);
        assert_eq!(classify("hello"), Classification::Irrelevant);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 11 chars, 22 bytes
        let body = "ééééééééééé";
        assert!(matches!(classify(body), Classification::Suspicious(_)));
    }

    #[test]
    fn test_preview_truncates_to_fifty_chars() {
        let body = "z".repeat(80);
        assert_eq!(preview(&body).chars().count(), 50);
        assert_eq!(preview("short"), "short");
    }
}
