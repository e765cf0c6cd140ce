//! Prelude module for common imports.
//!
//! ```
//! use seqdiff::prelude::*;
//!
//! let differ = Differ::with_config(Natural, DiffConfig::new(Strategy::Greedy));
//! assert!(differ.entries(&[1, 2], &[1, 2]).iter().all(DiffEntry::is_stable));
//! ```

// Comparators
pub use crate::compare::{ByKey, Comparator, HashComparator, Natural};

// Configuration
pub use crate::config::{DiffConfig, Strategy};

// Entry points
pub use crate::differ::{diff_exact, diff_heuristic, diff_lines, diff_spans, Differ};

// Scripts
pub use crate::alignment::Alignment;
pub use crate::script::{apply_script, apply_spans, DiffEntry, DiffKind, DiffStats, EditSpan, SpanKind};

// Error
pub use crate::error::{DiffError, DiffResult};
