//! Route authorization decisions.
//!
//! # Responsibilities
//! - Compile configured route lists into matchers
//! - Apply the decision ladder: page override, include list, exclude list,
//!   default-allow
//!
//! # Design Decisions
//! - The include list is a strict whitelist: when present, the exclude list
//!   is ignored entirely
//! - Page overrides beat both lists; deny is checked before allow
//! - Invalid patterns degrade to never-matching rules, so a broken include
//!   entry blocks nothing extra and a broken exclude entry excludes nothing
//! - Pure evaluation: no state is read or written per call, so concurrent
//!   navigations cannot interfere

use tracing::debug;

use crate::config::RouteRules;
use crate::decision::PageOverride;
use crate::pattern::{self, CompiledPattern};

/// Compiled decision engine for one set of route rules.
///
/// Construction compiles every configured pattern once; [`allows`] is then
/// a pure function of the path and override.
///
/// [`allows`]: RouteAuthorizer::allows
#[derive(Debug, Clone, Default)]
pub struct RouteAuthorizer {
    included: Vec<CompiledPattern>,
    excluded: Vec<CompiledPattern>,
}

impl RouteAuthorizer {
    /// Compile route rules into an authorizer.
    pub fn new(rules: &RouteRules) -> Self {
        Self {
            included: rules
                .included_routes
                .iter()
                .map(|p| CompiledPattern::compile(p))
                .collect(),
            excluded: rules
                .excluded_routes
                .iter()
                .map(|p| CompiledPattern::compile(p))
                .collect(),
        }
    }

    /// Compile route rules, reusing compilations from the process-wide
    /// pattern cache.
    pub fn cached(rules: &RouteRules) -> Self {
        let cache = pattern::cache::shared();
        Self {
            included: rules
                .included_routes
                .iter()
                .map(|p| cache.get_or_compile(p))
                .collect(),
            excluded: rules
                .excluded_routes
                .iter()
                .map(|p| cache.get_or_compile(p))
                .collect(),
        }
    }

    /// Decide whether tracking should fire for `path`.
    pub fn allows(&self, path: &str, page: PageOverride) -> bool {
        let (allowed, rule) = self.evaluate(path, page);
        debug!(%path, allowed, rule, "route decision");
        allowed
    }

    /// Decide, and name the rule that settled the decision.
    ///
    /// The rule name feeds decision logging and the CLI; `allows` is the
    /// plain boolean form.
    pub fn evaluate(&self, path: &str, page: PageOverride) -> (bool, &'static str) {
        match page {
            PageOverride::Deny => return (false, "page override deny"),
            PageOverride::Allow => return (true, "page override allow"),
            PageOverride::Unspecified => {}
        }

        // A non-empty include list is a whitelist: only listed routes track,
        // and the exclude list is never consulted.
        if !self.included.is_empty() {
            return if self.included.iter().any(|p| p.is_match(path)) {
                (true, "included route")
            } else {
                (false, "not in included routes")
            };
        }

        if !self.excluded.is_empty() {
            return if self.excluded.iter().any(|p| p.is_match(path)) {
                (false, "excluded route")
            } else {
                (true, "not excluded")
            };
        }

        (true, "default allow")
    }
}

/// Decide whether tracking should fire for one navigation.
///
/// Compiles `rules` through the shared pattern cache, so repeated calls
/// with the same configuration reuse earlier compilations.
pub fn is_allowed(path: &str, page: PageOverride, rules: &RouteRules) -> bool {
    RouteAuthorizer::cached(rules).allows(path, page)
}
