use std::collections::BTreeSet;

pub const TYPE_KEY: &str = "type";
pub const BOUNDARY_KEY: &str = "boundary";
pub const NAME_KEY: &str = "name";
pub const ADMIN_LEVEL_KEY: &str = "admin_level";

/// `type=boundary` on a relation.
pub const BOUNDARY_RELATION_TYPE: &str = "boundary";

pub const DEFAULT_MINIMUM_ADMIN_LEVEL: i64 = 1;
pub const DEFAULT_MAXIMUM_ADMIN_LEVEL: i64 = 11;

/// Decides whether a `boundary=*` value names an administrative boundary.
pub trait AdministrativeClassifier {
    fn is_administrative(&self, boundary: &str) -> bool;
}

impl<F> AdministrativeClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_administrative(&self, boundary: &str) -> bool {
        self(boundary)
    }
}

/// Exact-match set of administrative `boundary` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryValues {
    values: BTreeSet<String>,
}

impl BoundaryValues {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for BoundaryValues {
    fn default() -> Self {
        Self::new(["administrative"])
    }
}

impl AdministrativeClassifier for BoundaryValues {
    fn is_administrative(&self, boundary: &str) -> bool {
        self.values.contains(boundary)
    }
}

/// Whitespace in the narrow sense used for tag values: ASCII controls
/// 0x09..=0x0D and 0x1C..=0x1F plus Unicode space separators, excluding the
/// no-break spaces U+00A0, U+2007 and U+202F.
pub fn is_tag_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{001C}'..='\u{001F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Empty, or nothing but tag whitespace.
pub fn is_blank(value: &str) -> bool {
    value.chars().all(is_tag_whitespace)
}

/// Strict decimal integer syntax: an optional leading `-` followed only by
/// ASCII digits. No `+`, no separators, no surrounding whitespace.
pub fn is_valid_integer(value: &str) -> bool {
    let mut chars = value.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };

    if !first.is_ascii_digit() && !(first == '-' && value.len() > 1) {
        return false;
    }

    chars.all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_negative_integers() {
        for value in ["0", "1", "12", "-3", "007", "123456789012345678901234567890"] {
            assert!(is_valid_integer(value), "{value} should parse");
        }
    }

    #[test]
    fn rejects_noise_around_digits() {
        for value in ["", "-", "+5", "1;2", "1.0", " 1", "1 ", "a1", "1a", "--1", "1-"] {
            assert!(!is_valid_integer(value), "{value:?} should not parse");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert!(!is_valid_integer("\u{0663}"));
        assert!(!is_valid_integer("1\u{0663}"));
    }

    #[test]
    fn blank_values() {
        for value in ["", " ", "\t\n", "\u{001C}\u{001F}", "\u{2003}", "\u{3000}"] {
            assert!(is_blank(value), "{value:?} should be blank");
        }
    }

    #[test]
    fn no_break_spaces_and_next_line_are_not_blank() {
        for value in ["\u{00A0}", "\u{2007}", "\u{202F}", "\u{0085}", " x "] {
            assert!(!is_blank(value), "{value:?} should not be blank");
        }
    }

    #[test]
    fn default_boundary_values_match_administrative_exactly() {
        let values = BoundaryValues::default();
        assert!(values.is_administrative("administrative"));
        assert!(!values.is_administrative("Administrative"));
        assert!(!values.is_administrative("political"));
        assert!(!values.is_administrative(""));
    }

    #[test]
    fn closures_work_as_classifiers() {
        let classifier = |value: &str| value.starts_with("admin");
        assert!(classifier.is_administrative("administrative"));
        assert!(!classifier.is_administrative("maritime"));
    }
}
