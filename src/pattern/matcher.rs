//! Compiled route patterns.
//!
//! # Responsibilities
//! - Hold the anchored rule compiled from one glob pattern
//! - Match navigation paths against it (full string, not substring)
//! - Fold compile failures into a rule that never matches
//!
//! # Design Decisions
//! - Patterns are operator-supplied but untrusted; a malformed pattern must
//!   never crash the caller
//! - Fail closed: an unusable rule matches nothing, it does not match
//!   everything

use regex::Regex;

use crate::pattern::compiler::try_compile;

/// A route pattern compiled into an anchored matching rule.
///
/// Invalid patterns are kept (for diagnostics) but never match:
///
/// ```
/// use pixel_gate::pattern::CompiledPattern;
///
/// let broken = CompiledPattern::compile("/test/[invalid");
/// assert!(broken.is_unmatchable());
/// assert!(!broken.is_match("/test/[invalid"));
/// ```
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: String,
    /// `None` means the pattern failed to compile and matches nothing.
    regex: Option<Regex>,
}

impl CompiledPattern {
    /// Compile a glob pattern. Never fails; a malformed pattern produces a
    /// rule that matches no path, and the failure is logged.
    pub fn compile(pattern: &str) -> Self {
        let regex = match try_compile(pattern) {
            Ok(regex) => Some(regex),
            Err(error) => {
                tracing::warn!(
                    pattern = %pattern,
                    error = %error,
                    "Invalid route pattern, it will never match"
                );
                None
            }
        };
        Self {
            pattern: pattern.to_string(),
            regex,
        }
    }

    /// Returns true if the full path matches this pattern.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.as_ref().map_or(false, |regex| regex.is_match(path))
    }

    /// Returns true if the pattern failed to compile.
    pub fn is_unmatchable(&self) -> bool {
        self.regex.is_none()
    }

    /// The glob pattern this rule was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The anchored rule, when the pattern compiled.
    pub fn rule(&self) -> Option<&str> {
        self.regex.as_ref().map(|regex| regex.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_star_matches_one_segment() {
        let pattern = CompiledPattern::compile("/dashboard/*");

        assert!(pattern.is_match("/dashboard/inbox"));
        assert!(pattern.is_match("/dashboard/settings"));
        // No trailing segment at all.
        assert!(!pattern.is_match("/dashboard"));
        // Too deep: `*` never crosses a slash.
        assert!(!pattern.is_match("/dashboard/inbox/messages"));
    }

    #[test]
    fn test_double_star_matches_prefix_and_any_depth() {
        let pattern = CompiledPattern::compile("/dashboard/**");

        assert!(pattern.is_match("/dashboard"));
        assert!(pattern.is_match("/dashboard/inbox"));
        assert!(pattern.is_match("/dashboard/inbox/messages/123"));
        assert!(!pattern.is_match("/dashboards"));
        assert!(!pattern.is_match("/other"));
    }

    #[test]
    fn test_star_between_literal_segments() {
        let pattern = CompiledPattern::compile("/api/*/internal");

        assert!(pattern.is_match("/api/users/internal"));
        assert!(pattern.is_match("/api/posts/internal"));
        assert!(!pattern.is_match("/api/users/public"));
        assert!(!pattern.is_match("/api/users/internal/deep"));
    }

    #[test]
    fn test_full_match_not_substring() {
        let pattern = CompiledPattern::compile("/admin");

        assert!(pattern.is_match("/admin"));
        assert!(!pattern.is_match("/admin/users"));
        assert!(!pattern.is_match("/site/admin"));
    }

    #[test]
    fn test_escaped_metacharacters_match_literally() {
        let pattern = CompiledPattern::compile("/file.txt");

        assert!(pattern.is_match("/file.txt"));
        assert!(!pattern.is_match("/fileXtxt"));
    }

    #[test]
    fn test_malformed_pattern_matches_nothing() {
        let pattern = CompiledPattern::compile("/test/[invalid");

        assert!(pattern.is_unmatchable());
        assert!(pattern.rule().is_none());
        assert!(!pattern.is_match("/test/page"));
        assert!(!pattern.is_match("/test/[invalid"));
    }

    #[test]
    fn test_pattern_is_kept_for_diagnostics() {
        let pattern = CompiledPattern::compile("/dashboard/**");
        assert_eq!(pattern.pattern(), "/dashboard/**");
        assert_eq!(pattern.rule(), Some("^/dashboard(?:/.*)?$"));
    }
}
