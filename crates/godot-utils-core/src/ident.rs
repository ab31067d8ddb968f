//! Identifier normalization between Godot's `snake_case` keys and the names
//! used in generated declarations.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A run of digits or underscores followed by a letter, e.g. the `_2d` in `_2dRender`.
static DIGIT_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[_0-9]+[a-z]").expect("regex is valid"));

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("regex is valid"));

const KEYWORDS: &[&str] = &[
    "_", "Self", "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for",
    "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut",
    "override", "priv", "pub", "ref", "return", "self", "static", "struct", "super", "trait",
    "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while",
    "yield",
];

/// Converts a `snake_case` key into a `PascalCase` identifier.
///
/// Empty segments are dropped, so `move__left` and `_move_left_` both become
/// `MoveLeft`. Only the first character of each segment is uppercased; the rest
/// keeps its casing. A result starting with a digit is prefixed with `_`, and
/// every digit run adjacent to a letter is uppercased as a whole, so
/// `2d_render` becomes `_2DRender`.
///
/// The conversion is total: an empty or all-underscore input yields an empty
/// string, which callers must reject before emitting a declaration.
#[must_use]
pub fn snake_to_pascal(input: &str) -> String {
    let mut pascal: String = input
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect();

    if pascal.starts_with(|c: char| c.is_ascii_digit()) {
        pascal.insert(0, '_');
    }

    DIGIT_BOUNDARY
        .replace_all(&pascal, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Whether `name` can be emitted as a plain Rust identifier.
///
/// Only ASCII letters, digits and `_` are accepted, the first character is not
/// a digit, and keywords (`Self` included) are rejected.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name) && !KEYWORDS.contains(&name)
}

/// Converts a generated `PascalCase` identifier into `snake_case`.
///
/// Used for method and file names derived from generated names. A word break is
/// placed before an uppercase letter that follows a lowercase letter, and before
/// the last capital of an acronym that starts a new word (`HTTPServer` becomes
/// `http_server`). Digits never start a new word.
#[must_use]
pub fn pascal_to_snake(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut snake = String::with_capacity(input.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let breaks = prev.is_lowercase() || (prev.is_uppercase() && next_is_lower);
            if breaks {
                snake.push('_');
            }
        }
        snake.extend(c.to_lowercase());
    }

    snake
}
