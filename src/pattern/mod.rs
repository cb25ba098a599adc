//! Route pattern subsystem.
//!
//! # Data Flow
//! ```text
//! Glob pattern string ("/dashboard/**")
//!     → compiler.rs (escape → mark ** → expand * → expand ** → anchor)
//!     → matcher.rs (CompiledPattern: anchored regex, or never-match)
//!     → cache.rs (memoized by pattern string for the on-demand path)
//! ```
//!
//! # Design Decisions
//! - Rules are anchored: a pattern describes the whole path, never a
//!   substring of it
//! - Compilation never fails outward; malformed patterns become rules that
//!   match nothing (fail closed)
//! - Caching is an optimization only, the cache is semantically invisible

pub mod cache;
pub mod compiler;
pub mod matcher;

pub use cache::PatternCache;
pub use compiler::{glob_to_regex, try_compile};
pub use matcher::CompiledPattern;
