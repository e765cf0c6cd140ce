//! seqdiff - Edit scripts between ordered sequences
//!
//! ## Core Concepts
//!
//! **Pluggable equality**: elements are compared through a [`Comparator`],
//! not `T: Eq`, so two elements can match while differing in fields the
//! comparison ignores. Stable entries always carry the *old* element.
//!
//! **One alignment, two renderings**: every strategy decides which
//! elements match ([`Alignment`]); the result is rendered either per
//! element ([`DiffEntry`]) or as run-length spans ([`EditSpan`]).
//!
//! ## Strategies
//!
//! | Strategy | Algorithm | Optimal |
//! |----------|-----------|---------|
//! | [`Strategy::Exact`] | Hunt-Szymanski, Hirschberg past the match budget | yes |
//! | [`Strategy::LinearSpace`] | Hirschberg | yes |
//! | [`Strategy::Bidirectional`] | Myers middle snake | yes |
//! | [`Strategy::Greedy`] | single-pass scan | no |
//! | [`Strategy::Auto`] | Exact, then Hirschberg or Myers by size | yes |
//!
//! All strategies except `Greedy` trim the common prefix and suffix first.
//!
//! ## Modules
//! - `algo`: trimming, the four aligners, span coalescing
//! - `alignment`: matched pairs shared by every strategy
//! - `compare`: `Comparator`, `HashComparator`, `Natural`, `ByKey`
//! - `config`: `DiffConfig`, `Strategy`
//! - `differ`: `Differ` and the `diff_*` entry points
//! - `script`: entries, spans, statistics and replay
//! - `error`: replay errors
//!
//! ## Usage
//!
//! ```
//! use seqdiff::{apply_script, apply_spans, diff_exact, diff_spans, DiffKind, Natural};
//!
//! let old = [0, 1, 2, 3, 4, 5];
//! let new = [0, 2, 3, 4, 5, 6];
//!
//! let script = diff_exact(&old, &new, &Natural);
//! let kinds: Vec<DiffKind> = script.iter().map(|e| e.kind).collect();
//! assert_eq!(kinds[1], DiffKind::Remove);
//! assert_eq!(apply_script(&old, &script).unwrap(), new);
//!
//! let spans = diff_spans(&old, &new, &Natural);
//! assert_eq!(spans.len(), 4);
//! assert_eq!(apply_spans(&old, &spans).unwrap(), new);
//! ```

// =============================================================================
// Modules
// =============================================================================

/// Algorithms: trim, hunt, hirschberg, myers, greedy, coalesce
pub mod algo;

/// Matched index pairs
pub mod alignment;

/// Element equality
pub mod compare;

/// Strategy and limits
pub mod config;

/// Strategy front-end and entry points
pub mod differ;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

/// Edit scripts and replay
pub mod script;

// =============================================================================
// Re-exports
// =============================================================================

// Comparators
pub use compare::{ByKey, Comparator, HashComparator, Natural};

// Configuration
pub use config::{DiffConfig, Strategy, DEFAULT_MATCH_BUDGET, DEFAULT_MAX_FALLBACK_CELLS};

// Entry points
pub use differ::{diff_exact, diff_heuristic, diff_lines, diff_spans, Differ};

// Scripts
pub use alignment::Alignment;
pub use script::{apply_script, apply_spans, DiffEntry, DiffKind, DiffStats, EditSpan, SpanKind};

// Error types
pub use error::{DiffError, DiffResult};

// =============================================================================
// Tests
// =============================================================================
