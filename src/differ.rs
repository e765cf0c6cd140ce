//! Strategy front-end.
//!
//! [`Differ`] pairs a comparator with a [`DiffConfig`] and routes the
//! residual middle of every diff to the configured strategy:
//!
//! ```text
//! old, new
//!   ├─ Greedy ── greedy scan over the whole input
//!   └─ Trim ── prefix/suffix matched directly
//!        └─ middle
//!             ├─ Exact ────────── Hunt-Szymanski ──over budget──► Hirschberg
//!             ├─ Auto ─────────── Hunt-Szymanski ──over budget──► Hirschberg | Myers
//!             ├─ LinearSpace ──── Hirschberg
//!             └─ Bidirectional ── Myers
//! ```
//!
//! The greedy scan never trims: a shared suffix it would otherwise skip
//! can change which removals it commits to.
//!
//! Every strategy fills the same [`Alignment`], which is then rendered
//! into entries or spans.
//!
//! The `*_unhashed` methods accept any [`Comparator`], including plain
//! closures. They serve `Exact` and `Auto` with the linear-space splitter,
//! since the exact matcher needs a [`HashComparator`].

use crate::algo::{self, Trim};
use crate::alignment::Alignment;
use crate::compare::{Comparator, HashComparator, Natural};
use crate::config::{DiffConfig, Strategy};
use crate::script::{DiffEntry, EditSpan};

// =============================================================================
// Differ
// =============================================================================

/// A comparator bound to a configuration.
///
/// # Example
///
/// ```
/// use seqdiff::{DiffConfig, Differ, DiffStats, Natural, Strategy};
///
/// let differ = Differ::with_config(Natural, DiffConfig::new(Strategy::LinearSpace));
/// let entries = differ.entries(&[1, 2, 3], &[1, 3, 4]);
/// let stats = DiffStats::from_entries(&entries);
/// assert_eq!((stats.kept, stats.removed, stats.inserted), (2, 1, 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Differ<C> {
    cmp: C,
    config: DiffConfig,
}

impl<C> Differ<C> {
    /// Create a differ with the default configuration.
    pub fn new(cmp: C) -> Self {
        Self::with_config(cmp, DiffConfig::default())
    }

    /// Create a differ with a custom configuration.
    pub fn with_config(cmp: C, config: DiffConfig) -> Self {
        Self { cmp, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// The comparator.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Matched pairs between `old` and `new`.
    pub fn alignment<T>(&self, old: &[T], new: &[T]) -> Alignment
    where
        C: HashComparator<T>,
    {
        let config = self.config;
        match config.strategy {
            Strategy::Exact | Strategy::Auto => trimmed(old, new, &self.cmp, |a, b, offset, out| {
                exact_middle(a, b, offset, &self.cmp, &config, out)
            }),
            other => align_with(old, new, &self.cmp, other),
        }
    }

    /// Per-element script turning `old` into `new`.
    pub fn entries<T: Clone>(&self, old: &[T], new: &[T]) -> Vec<DiffEntry<T>>
    where
        C: HashComparator<T>,
    {
        self.alignment(old, new).entries(old, new)
    }

    /// Coalesced run-length script turning `old` into `new`.
    pub fn spans<T: Clone>(&self, old: &[T], new: &[T]) -> Vec<EditSpan<T>>
    where
        C: HashComparator<T>,
    {
        self.alignment(old, new).spans(old, new)
    }

    /// Matched pairs using only the comparator's equality.
    ///
    /// # Example
    ///
    /// ```
    /// use seqdiff::{DiffConfig, Differ, Strategy};
    ///
    /// let same_len = |a: &&str, b: &&str| a.len() == b.len();
    /// let differ = Differ::with_config(same_len, DiffConfig::new(Strategy::Bidirectional));
    /// let alignment = differ.alignment_unhashed(&["ab", "cde"], &["xyz", "f"]);
    /// assert_eq!(alignment.pairs(), &[(1, 0)]);
    /// ```
    pub fn alignment_unhashed<T>(&self, old: &[T], new: &[T]) -> Alignment
    where
        C: Comparator<T>,
    {
        align_with(old, new, &self.cmp, self.config.strategy)
    }

    /// Per-element script using only the comparator's equality.
    pub fn entries_unhashed<T: Clone>(&self, old: &[T], new: &[T]) -> Vec<DiffEntry<T>>
    where
        C: Comparator<T>,
    {
        self.alignment_unhashed(old, new).entries(old, new)
    }

    /// Coalesced run-length script using only the comparator's equality.
    pub fn spans_unhashed<T: Clone>(&self, old: &[T], new: &[T]) -> Vec<EditSpan<T>>
    where
        C: Comparator<T>,
    {
        self.alignment_unhashed(old, new).spans(old, new)
    }

    /// Diff many independent pairs, in parallel with the `parallel` feature.
    #[cfg(feature = "parallel")]
    pub fn entries_batch<T>(&self, pairs: &[(&[T], &[T])]) -> Vec<Vec<DiffEntry<T>>>
    where
        T: Clone + Send + Sync,
        C: HashComparator<T> + Sync,
    {
        use rayon::prelude::*;

        pairs.par_iter().map(|(old, new)| self.entries(old, new)).collect()
    }

    /// Diff many independent pairs, in parallel with the `parallel` feature.
    #[cfg(not(feature = "parallel"))]
    pub fn entries_batch<T>(&self, pairs: &[(&[T], &[T])]) -> Vec<Vec<DiffEntry<T>>>
    where
        T: Clone + Send + Sync,
        C: HashComparator<T> + Sync,
    {
        pairs.iter().map(|(old, new)| self.entries(old, new)).collect()
    }
}

// =============================================================================
// Routing
// =============================================================================

/// Trim common runs, then let `middle` align the residual.
///
/// `middle` receives the residual slices, their offset in both
/// sequences (the prefix length) and the alignment to append to.
fn trimmed<T, C, F>(old: &[T], new: &[T], cmp: &C, middle: F) -> Alignment
where
    C: Comparator<T> + ?Sized,
    F: FnOnce(&[T], &[T], usize, &mut Alignment),
{
    let trim = Trim::compute(old, new, cmp);
    tracing::trace!(prefix = trim.prefix, suffix = trim.suffix, "trimmed common runs");

    let mut out = Alignment::new(old.len(), new.len());
    out.push_run(0, 0, trim.prefix);
    middle(trim.middle(old), trim.middle(new), trim.prefix, &mut out);
    out.push_run(old.len() - trim.suffix, new.len() - trim.suffix, trim.suffix);
    out
}

/// Greedy scan over the untrimmed input.
fn greedy<T, C>(old: &[T], new: &[T], cmp: &C) -> Alignment
where
    C: Comparator<T> + ?Sized,
{
    tracing::debug!(strategy = ?Strategy::Greedy, old_len = old.len(), new_len = new.len(), "aligning input");

    let mut out = Alignment::new(old.len(), new.len());
    algo::greedy::align(old, new, (0, 0), cmp, &mut out);
    out
}

/// Align with a strategy that needs no hashing.
///
/// The exact strategies are served by the linear-space splitter here.
fn align_with<T, C>(old: &[T], new: &[T], cmp: &C, strategy: Strategy) -> Alignment
where
    C: Comparator<T> + ?Sized,
{
    if strategy == Strategy::Greedy {
        return greedy(old, new, cmp);
    }

    trimmed(old, new, cmp, |a, b, offset, out| {
        tracing::debug!(?strategy, old_len = a.len(), new_len = b.len(), "aligning residual");
        match strategy {
            Strategy::Bidirectional => algo::myers::align(a, b, (offset, offset), cmp, out),
            Strategy::LinearSpace | Strategy::Exact | Strategy::Auto | Strategy::Greedy => {
                algo::hirschberg::align(a, b, (offset, offset), cmp, out)
            }
        }
    })
}

/// Hunt-Szymanski on the residual, with the configured fallback.
fn exact_middle<T, C>(a: &[T], b: &[T], offset: usize, cmp: &C, config: &DiffConfig, out: &mut Alignment)
where
    C: HashComparator<T> + ?Sized,
{
    tracing::debug!(strategy = ?config.strategy, old_len = a.len(), new_len = b.len(), "aligning residual");

    let Err(over) = algo::hunt::align(a, b, (offset, offset), cmp, config.match_budget, out) else {
        return;
    };

    let cells = a.len().saturating_mul(b.len());
    let bidirectional = config.strategy == Strategy::Auto && cells > config.max_fallback_cells;
    let fallback = if bidirectional { "bidirectional" } else { "linear-space" };
    tracing::debug!(
        total_matches = over.total_matches,
        budget = config.match_budget,
        cells,
        fallback,
        "match budget exceeded, falling back"
    );

    if bidirectional {
        algo::myers::align(a, b, (offset, offset), cmp, out);
    } else {
        algo::hirschberg::align(a, b, (offset, offset), cmp, out);
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// Optimal per-element script: Hunt-Szymanski, Hirschberg past the budget.
///
/// # Example
///
/// ```
/// use seqdiff::{diff_exact, DiffEntry, Natural};
///
/// let script = diff_exact(&[0, 1, 2, 3, 4, 5], &[0, 2, 3, 4, 5, 6], &Natural);
/// assert_eq!(script[1], DiffEntry::remove(1));
/// assert_eq!(script[6], DiffEntry::insert(6));
/// ```
pub fn diff_exact<T, C>(old: &[T], new: &[T], cmp: &C) -> Vec<DiffEntry<T>>
where
    T: Clone,
    C: HashComparator<T> + ?Sized,
{
    let config = DiffConfig::default();
    trimmed(old, new, cmp, |a, b, offset, out| exact_middle(a, b, offset, cmp, &config, out)).entries(old, new)
}

/// Fast, non-optimal per-element script from a single greedy scan.
pub fn diff_heuristic<T, C>(old: &[T], new: &[T], cmp: &C) -> Vec<DiffEntry<T>>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    greedy(old, new, cmp).entries(old, new)
}

/// Coalesced run-length script from the bidirectional middle-snake search.
pub fn diff_spans<T, C>(old: &[T], new: &[T], cmp: &C) -> Vec<EditSpan<T>>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    algo::coalesce(algo::myers::spans(old, new, cmp))
}

/// Line-by-line diff of two texts, splitting on `'\n'`.
pub fn diff_lines<'a>(old: &'a str, new: &'a str) -> Vec<DiffEntry<&'a str>> {
    let old: Vec<&str> = old.split('\n').collect();
    let new: Vec<&str> = new.split('\n').collect();
    diff_exact(&old, &new, &Natural)
}
