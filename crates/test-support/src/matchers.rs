use std::fmt;

use hamcrest2::core::{MatchResult, Matcher};

/// Matches generated source text line by line.
///
/// Lines are compared after trimming surrounding whitespace, so expectations do
/// not need to repeat the generator's indentation. See `lines_match` for the
/// supported `[..]` wildcard.
#[derive(Clone, Default)]
pub struct Declares {
    in_order: Vec<String>,
    contains_n: Vec<(String, usize)>,
    not_contains: Vec<String>,
}

impl Declares {
    /// Verify that the given lines appear in this order, not necessarily adjacent.
    #[must_use]
    pub fn with_lines(mut self, expected: &[&str]) -> Self {
        self.in_order.extend(expected.iter().map(ToString::to_string));
        self
    }

    /// Verify that a line matching `expected` appears exactly `number` times.
    #[must_use]
    pub fn with_line_n(mut self, expected: &str, number: usize) -> Self {
        self.contains_n.push((expected.to_string(), number));
        self
    }

    /// Verify that no line matches `expected`.
    #[must_use]
    pub fn without_line(mut self, expected: &str) -> Self {
        self.not_contains.push(expected.to_string());
        self
    }

    fn match_text(&self, actual: &str) -> MatchResult {
        let lines: Vec<&str> = actual.lines().map(str::trim).collect();

        let mut remaining = lines.iter();
        for expected in &self.in_order {
            if !remaining.any(|line| lines_match(expected.trim(), line)) {
                return Err(format!(
                    "expected line in order:\n{expected}\nin generated source:\n{actual}"
                ));
            }
        }

        for (expected, number) in &self.contains_n {
            let found = lines
                .iter()
                .filter(|line| lines_match(expected.trim(), line))
                .count();
            if found != *number {
                return Err(format!(
                    "expected {number} occurrences of:\n{expected}\nbut found {found} in:\n{actual}"
                ));
            }
        }

        for unexpected in &self.not_contains {
            if lines.iter().any(|line| lines_match(unexpected.trim(), line)) {
                return Err(format!(
                    "expected generated source not to contain:\n{unexpected}\nbut found it in:\n{actual}"
                ));
            }
        }

        Ok(())
    }
}

/// Compares a line with an expected pattern.
/// - Use `[..]` as a wildcard to match 0 or more characters on the same line
///   (similar to `.*` in a regex).
#[must_use]
pub fn lines_match(expected: &str, mut actual: &str) -> bool {
    for (i, part) in expected.split("[..]").enumerate() {
        match actual.find(part) {
            Some(j) => {
                if i == 0 && j != 0 {
                    return false;
                }
                actual = &actual[j + part.len()..];
            }
            None => return false,
        }
    }
    actual.is_empty() || expected.ends_with("[..]")
}

#[test]
fn lines_match_works() {
    assert!(lines_match("a b", "a b"));
    assert!(lines_match("a[..]b", "a b"));
    assert!(lines_match("a[..]", "a b"));
    assert!(lines_match("[..]", "a b"));
    assert!(lines_match("[..]b", "a b"));

    assert!(!lines_match("[..]b", "c"));
    assert!(!lines_match("b", "c"));
    assert!(!lines_match("b", "cb"));
}

impl fmt::Display for Declares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "declares")
    }
}

impl fmt::Debug for Declares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "declares")
    }
}

impl Matcher<&str> for Declares {
    fn matches(&self, actual: &str) -> MatchResult {
        self.match_text(actual)
    }
}

impl Matcher<&String> for Declares {
    fn matches(&self, actual: &String) -> MatchResult {
        self.match_text(actual)
    }
}

impl Matcher<String> for Declares {
    fn matches(&self, actual: String) -> MatchResult {
        self.match_text(&actual)
    }
}

#[must_use]
pub fn declares() -> Declares {
    Declares::default()
}

#[test]
fn declares_checks_order_and_counts() {
    let source = "pub mod input_name {\n    pub const Jump: &str = \"jump\";\n    pub const Fire: &str = \"fire\";\n}\n";

    assert!(
        declares()
            .with_lines(&["pub mod input_name {", "pub const Fire: [..]"])
            .match_text(source)
            .is_ok()
    );
    assert!(
        declares()
            .with_lines(&["pub const Fire: [..]", "pub const Jump: [..]"])
            .match_text(source)
            .is_err()
    );
    assert!(declares().with_line_n("pub const [..]", 2).match_text(source).is_ok());
    assert!(declares().without_line("pub const Jump: [..]").match_text(source).is_err());
}
