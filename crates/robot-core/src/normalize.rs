//! Name and value normalization

/// Canonicalize a command name, option name, or enumerated value.
///
/// Strips leading/trailing whitespace and folds to lowercase. Free-form
/// payloads (text to type, process arguments) must never pass through here.
pub fn canonicalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("foo"), "foo");
        assert_eq!(canonicalize(" foo"), "foo");
        assert_eq!(canonicalize("foo   "), "foo");
        assert_eq!(canonicalize("fOo"), "foo");
        assert_eq!(canonicalize("  FOo "), "foo");
        assert_eq!(canonicalize("\tKeyPress\n"), "keypress");
    }

    #[test]
    fn test_canonicalize_idempotent() {
        for s in ["  FOo ", "", "   ", "Ünïcode  ", "mixed Case words", "\n\tx"] {
            let once = canonicalize(s);
            assert_eq!(canonicalize(&once), once);
        }
    }

    #[test]
    fn test_canonicalize_keeps_inner_whitespace() {
        assert_eq!(canonicalize("  Page Up "), "page up");
    }
}
