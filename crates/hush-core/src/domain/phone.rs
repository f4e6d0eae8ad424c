/// Strips formatting from a dialable phone number.
///
/// A value is dialable when it consists of an optional leading `+` followed
/// by digits, hyphens, parentheses and spaces. Dialable values keep only
/// the `+` and digits; anything else (a symbolic caller id, for instance)
/// is returned trimmed but otherwise unchanged.
pub fn normalize_number(raw: &str) -> String {
    let trimmed = raw.trim();
    if !is_dialable(trimmed) {
        return trimmed.to_string();
    }
    trimmed
        .chars()
        .filter(|ch| !matches!(ch, '-' | '(' | ')' | ' '))
        .collect()
}

fn is_dialable(value: &str) -> bool {
    let body = value.strip_prefix('+').unwrap_or(value);
    if body.is_empty() {
        return false;
    }
    body.chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '(' | ')' | ' '))
}

/// Detects a private (withheld) caller id.
///
/// Absent or blank values are private, as is any value the platform encodes
/// as a negative integer. A non-empty value that fails to parse is treated
/// as a real, just non-numeric, identifier.
pub fn is_private_number(raw: Option<&str>) -> bool {
    let Some(raw) = raw else {
        return true;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return true;
    }
    matches!(trimmed.parse::<i64>(), Ok(value) if value < 0)
}

#[cfg(test)]
mod tests {
    use super::{is_private_number, normalize_number};

    #[test]
    fn normalize_strips_formatting_from_dialable_numbers() {
        assert_eq!(normalize_number("  (415) 555-1212  "), "4155551212");
        assert_eq!(normalize_number("+1 (555) 123-4567"), "+15551234567");
    }

    #[test]
    fn normalize_leaves_symbolic_caller_ids_unchanged() {
        assert_eq!(normalize_number("CALLER-ID"), "CALLER-ID");
        assert_eq!(normalize_number("  VOICEMAIL "), "VOICEMAIL");
    }

    #[test]
    fn normalize_keeps_a_lone_plus_unchanged() {
        assert_eq!(normalize_number("+"), "+");
    }

    #[test]
    fn normalize_can_produce_an_empty_string() {
        assert_eq!(normalize_number("()"), "");
        assert_eq!(normalize_number("   "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["+1 (555) 123-4567", "CALLER-ID", "()", "  5551234 "] {
            let once = normalize_number(raw);
            assert_eq!(normalize_number(&once), once);
        }
    }

    #[test]
    fn absent_and_blank_numbers_are_private() {
        assert!(is_private_number(None));
        assert!(is_private_number(Some("")));
        assert!(is_private_number(Some("   ")));
    }

    #[test]
    fn negative_encodings_are_private() {
        assert!(is_private_number(Some("-5")));
        assert!(is_private_number(Some(" -1 ")));
    }

    #[test]
    fn real_numbers_and_symbolic_ids_are_not_private() {
        assert!(!is_private_number(Some("12345")));
        assert!(!is_private_number(Some("+12345")));
        assert!(!is_private_number(Some("ABC")));
    }
}
