//! Compiled pattern caching.
//!
//! Route patterns come from static configuration, so the same handful of
//! strings is compiled over and over on the per-navigation path. The cache
//! memoizes compilation by pattern string; it stays small and is never
//! invalidated because the configuration is immutable once loaded.

use std::sync::{Arc, LazyLock};

use dashmap::DashMap;

use crate::pattern::matcher::CompiledPattern;

/// A thread-safe cache of compiled route patterns.
#[derive(Clone, Default)]
pub struct PatternCache {
    inner: Arc<DashMap<String, CompiledPattern>>,
}

impl PatternCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Fetch the compiled form of a pattern, compiling on first use.
    ///
    /// Cloning a compiled pattern is cheap; the regex is reference-counted
    /// internally.
    pub fn get_or_compile(&self, pattern: &str) -> CompiledPattern {
        if let Some(hit) = self.inner.get(pattern) {
            return hit.value().clone();
        }
        let compiled = CompiledPattern::compile(pattern);
        self.inner.insert(pattern.to_string(), compiled.clone());
        compiled
    }

    /// Returns true if the full path matches the (cached) pattern.
    pub fn matches(&self, path: &str, pattern: &str) -> bool {
        self.get_or_compile(pattern).is_match(path)
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if nothing has been compiled yet.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

static SHARED: LazyLock<PatternCache> = LazyLock::new(PatternCache::new);

/// The process-wide pattern cache used by the on-demand decision path.
pub fn shared() -> &'static PatternCache {
    &SHARED
}
