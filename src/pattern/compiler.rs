//! Glob-to-regex translation.
//!
//! # Responsibilities
//! - Translate one glob route pattern into an anchored regex rule
//! - Keep `*` within a single path segment, let `**` cross segments
//! - Make the slash before a trailing `**` optional
//!
//! # Design Decisions
//! - Full-string matching: every rule is anchored with `^` and `$`
//! - Rewrite order matters; `**` is marked before `*` is expanded
//! - `[` and `]` stay live so character classes work and unbalanced
//!   classes fail at compile time instead of matching literally

use regex::Regex;

/// Stand-in for `**` while single `*` is expanded.
///
/// Escaping leaves no adjacent bare metacharacters in the pattern, so this
/// token cannot collide with anything a user typed.
const DOUBLE_STAR_MARK: &str = "{^double-star^}";

/// Escape regex metacharacters, leaving `*`, `/`, `[` and `]` untouched.
///
/// `regex::escape` is not usable here: it would also escape the wildcards
/// and brackets that carry the glob syntax.
fn escape_literals(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len() * 2);
    for c in pattern.chars() {
        match c {
            '.' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Translate a glob route pattern into an anchored regex rule.
///
/// Supports `/path/*` (one segment), `/path/**` (any depth, the `/path`
/// prefix itself included) and nested forms like `/api/*/internal`.
pub fn glob_to_regex(pattern: &str) -> String {
    let mut rule = escape_literals(pattern)
        .replace("**", DOUBLE_STAR_MARK)
        .replace('*', "[^/]*")
        .replace(DOUBLE_STAR_MARK, ".*");

    // A trailing `/**` must also match the bare prefix: rewrite the tail so
    // the slash is optional. Has to happen before the closing anchor goes in.
    let trailing_glob = rule.ends_with("/.*");
    if trailing_glob {
        rule.truncate(rule.len() - "/.*".len());
        rule.push_str("(?:/.*)?$");
    }

    if !rule.starts_with('^') {
        rule.insert(0, '^');
    }
    // Step 5 is the only thing that end-anchors early. A pattern ending in a
    // literal `$` escapes to `\$` and still needs the closing anchor.
    if !trailing_glob {
        rule.push('$');
    }

    rule
}

/// Compile a glob pattern, preserving the regex error on failure.
///
/// Most callers want [`CompiledPattern::compile`](super::CompiledPattern),
/// which folds failures into a never-matching rule; validation and the CLI
/// use this to report *why* a pattern is unusable.
pub fn try_compile(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&glob_to_regex(pattern))
}
