//! Edit script representations.
//!
//! Two renderings of the same alignment:
//!
//! | Type | Granularity | Inserted values |
//! |------|-------------|-----------------|
//! | [`DiffEntry`] | one entry per element | the entry's `value` |
//! | [`EditSpan`] | one span per run | `items` on Insert spans |
//!
//! Both can be replayed against the old sequence with [`apply_script`] and
//! [`apply_spans`].

use crate::error::{DiffError, DiffResult};

// =============================================================================
// Per-element entries
// =============================================================================

/// Classification of a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    /// Present in both sequences
    Stable,
    /// Only in the new sequence
    Insert,
    /// Only in the old sequence
    Remove,
}

/// One element of a per-element edit script.
///
/// `Stable` entries carry the element from the *old* sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry<T> {
    /// What happened to the element
    pub kind: DiffKind,
    /// The element itself
    pub value: T,
}

impl<T> DiffEntry<T> {
    /// Unchanged element, taken from the old sequence.
    #[inline]
    pub fn stable(value: T) -> Self {
        Self { kind: DiffKind::Stable, value }
    }

    /// Element added by the new sequence.
    #[inline]
    pub fn insert(value: T) -> Self {
        Self { kind: DiffKind::Insert, value }
    }

    /// Element dropped from the old sequence.
    #[inline]
    pub fn remove(value: T) -> Self {
        Self { kind: DiffKind::Remove, value }
    }

    /// Check if this entry is unchanged.
    pub fn is_stable(&self) -> bool {
        self.kind == DiffKind::Stable
    }
}

// =============================================================================
// Run-length spans
// =============================================================================

/// Kind of a run-length span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Run present in both sequences
    Match,
    /// Run removed from the old sequence
    Delete,
    /// Run added by the new sequence
    Insert,
}

/// A run of same-kind edits.
///
/// Match and Delete spans point into the old sequence. Insert spans have
/// no old counterpart and carry their values in `items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSpan<T> {
    /// Kind of the run
    pub kind: SpanKind,
    /// Start of the run in the old sequence (insertion point for Insert)
    pub old_start: usize,
    /// Start of the run in the new sequence (deletion point for Delete)
    pub new_start: usize,
    /// Number of elements in the run
    pub len: usize,
    /// Inserted values, `Some` for Insert spans built by this crate
    pub items: Option<Vec<T>>,
}

impl<T> EditSpan<T> {
    /// Matched run of `len` elements.
    pub fn matched(old_start: usize, new_start: usize, len: usize) -> Self {
        Self { kind: SpanKind::Match, old_start, new_start, len, items: None }
    }

    /// Deleted run of `len` old elements.
    pub fn delete(old_start: usize, new_start: usize, len: usize) -> Self {
        Self { kind: SpanKind::Delete, old_start, new_start, len, items: None }
    }

    /// Inserted run carrying its values.
    pub fn insert(old_start: usize, new_start: usize, items: Vec<T>) -> Self {
        Self {
            kind: SpanKind::Insert,
            old_start,
            new_start,
            len: items.len(),
            items: Some(items),
        }
    }

    /// End of the run in the old sequence.
    #[inline]
    pub fn old_end(&self) -> usize {
        match self.kind {
            SpanKind::Insert => self.old_start,
            _ => self.old_start + self.len,
        }
    }

    /// End of the run in the new sequence.
    #[inline]
    pub fn new_end(&self) -> usize {
        match self.kind {
            SpanKind::Delete => self.new_start,
            _ => self.new_start + self.len,
        }
    }
}

// =============================================================================
// Statistics
// =============================================================================

/// Element counts of a script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    /// Elements kept unchanged
    pub kept: usize,
    /// Elements inserted
    pub inserted: usize,
    /// Elements removed
    pub removed: usize,
}

impl DiffStats {
    /// Count a per-element script.
    pub fn from_entries<T>(entries: &[DiffEntry<T>]) -> Self {
        entries.iter().fold(Self::default(), |mut stats, entry| {
            match entry.kind {
                DiffKind::Stable => stats.kept += 1,
                DiffKind::Insert => stats.inserted += 1,
                DiffKind::Remove => stats.removed += 1,
            }
            stats
        })
    }

    /// Count a run-length script.
    pub fn from_spans<T>(spans: &[EditSpan<T>]) -> Self {
        spans.iter().fold(Self::default(), |mut stats, span| {
            match span.kind {
                SpanKind::Match => stats.kept += span.len,
                SpanKind::Insert => stats.inserted += span.len,
                SpanKind::Delete => stats.removed += span.len,
            }
            stats
        })
    }

    /// Total number of edits (not counting kept elements)
    pub fn edit_count(&self) -> usize {
        self.inserted + self.removed
    }

    /// Check if the script changes nothing
    pub fn is_unchanged(&self) -> bool {
        self.edit_count() == 0
    }
}

// =============================================================================
// Replay
// =============================================================================

/// Replay a per-element script against `old`.
///
/// Stable entries take the element from `old`, so with the natural
/// comparator the result equals the new sequence exactly.
pub fn apply_script<T: Clone>(old: &[T], entries: &[DiffEntry<T>]) -> DiffResult<Vec<T>> {
    let mut result = Vec::with_capacity(entries.len());
    let mut cursor = 0;

    for entry in entries {
        match entry.kind {
            DiffKind::Insert => result.push(entry.value.clone()),
            DiffKind::Stable | DiffKind::Remove => {
                let Some(item) = old.get(cursor) else {
                    return Err(DiffError::Truncated { consumed: cursor + 1, old_len: old.len() });
                };
                if entry.kind == DiffKind::Stable {
                    result.push(item.clone());
                }
                cursor += 1;
            }
        }
    }

    if cursor != old.len() {
        return Err(DiffError::Truncated { consumed: cursor, old_len: old.len() });
    }
    Ok(result)
}

/// Replay a run-length script against `old`.
///
/// Fails if an Insert span lacks items or the spans do not walk `old`
/// contiguously from start to end.
pub fn apply_spans<T: Clone>(old: &[T], spans: &[EditSpan<T>]) -> DiffResult<Vec<T>> {
    let mut result = Vec::with_capacity(old.len());
    let mut cursor = 0;

    for span in spans {
        match span.kind {
            SpanKind::Insert => {
                let items = span
                    .items
                    .as_ref()
                    .ok_or(DiffError::MissingInsertItems { new_start: span.new_start })?;
                if items.len() != span.len {
                    return Err(DiffError::ItemCountMismatch {
                        new_start: span.new_start,
                        expected: span.len,
                        found: items.len(),
                    });
                }
                result.extend_from_slice(items);
            }
            SpanKind::Match | SpanKind::Delete => {
                if span.old_start != cursor {
                    return Err(DiffError::Discontiguous { expected: cursor, found: span.old_start });
                }
                let end = span.old_start + span.len;
                if end > old.len() {
                    return Err(DiffError::OutOfBounds {
                        kind: span.kind,
                        start: span.old_start,
                        len: span.len,
                        old_len: old.len(),
                    });
                }
                if span.kind == SpanKind::Match {
                    result.extend_from_slice(&old[span.old_start..end]);
                }
                cursor = end;
            }
        }
    }

    if cursor != old.len() {
        return Err(DiffError::Truncated { consumed: cursor, old_len: old.len() });
    }
    Ok(result)
}
