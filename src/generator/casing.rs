//! Capitalization rules applied to finished candidates

use crate::types::CaseRule;

/// Characters that delimit segments for title casing
const SEPARATOR_CHARS: &[char] = &['_', '-', '.'];

/// Apply a case rule to a raw candidate
///
/// Applied uniformly after generation, whatever method produced the string.
pub fn apply_case(candidate: &str, rule: CaseRule) -> String {
    match rule {
        CaseRule::Lowercase => candidate.to_lowercase(),
        CaseRule::Uppercase => candidate.to_uppercase(),
        CaseRule::TitleCase => title_case(candidate),
        CaseRule::Original => candidate.to_string(),
    }
}

/// Capitalize each run between separator characters independently
///
/// Separators pass through verbatim. Empty segments (a leading, trailing or
/// doubled separator) capitalize to empty strings, so the separator layout is
/// never disturbed.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut segment = String::new();

    for c in s.chars() {
        if SEPARATOR_CHARS.contains(&c) {
            out.push_str(&capitalize(&segment));
            out.push(c);
            segment.clear();
        } else {
            segment.push(c);
        }
    }
    out.push_str(&capitalize(&segment));

    out
}

/// First character upper, the rest lower
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_per_segment() {
        assert_eq!(apply_case("foo_bar-baz", CaseRule::TitleCase), "Foo_Bar-Baz");
        assert_eq!(apply_case("quick.fox", CaseRule::TitleCase), "Quick.Fox");
        assert_eq!(apply_case("QUICK_FOX", CaseRule::TitleCase), "Quick_Fox");
    }

    #[test]
    fn test_title_case_edges() {
        assert_eq!(apply_case("", CaseRule::TitleCase), "");
        assert_eq!(apply_case("a", CaseRule::TitleCase), "A");
        assert_eq!(apply_case("_foo", CaseRule::TitleCase), "_Foo");
        assert_eq!(apply_case("foo_", CaseRule::TitleCase), "Foo_");
        assert_eq!(apply_case("foo..bar", CaseRule::TitleCase), "Foo..Bar");
        assert_eq!(apply_case("-", CaseRule::TitleCase), "-");
    }

    #[test]
    fn test_title_case_leaves_digits_alone() {
        assert_eq!(apply_case("quickfox42", CaseRule::TitleCase), "Quickfox42");
        assert_eq!(apply_case("fox_7club", CaseRule::TitleCase), "Fox_7club");
    }

    #[test]
    fn test_whole_string_rules() {
        assert_eq!(apply_case("Quick_Fox", CaseRule::Lowercase), "quick_fox");
        assert_eq!(apply_case("Quick_Fox", CaseRule::Uppercase), "QUICK_FOX");
        assert_eq!(apply_case("QuIcK.FoX", CaseRule::Original), "QuIcK.FoX");
    }

    #[test]
    fn test_lower_and_upper_are_idempotent() {
        let once = apply_case("Brave-Wolf99", CaseRule::Lowercase);
        assert_eq!(apply_case(&once, CaseRule::Lowercase), once);

        let once = apply_case("Brave-Wolf99", CaseRule::Uppercase);
        assert_eq!(apply_case(&once, CaseRule::Uppercase), once);
    }

    #[test]
    fn test_title_case_is_idempotent() {
        let once = apply_case("grim_orc-42", CaseRule::TitleCase);
        assert_eq!(apply_case(&once, CaseRule::TitleCase), once);
    }
}
