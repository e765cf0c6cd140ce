//! Matched index pairs shared by every strategy.
//!
//! Strategies only decide *which* elements match. Rendering that decision
//! into per-element entries or run-length spans happens here, once, so
//! every strategy fills gaps the same way: removals first, then
//! insertions.

use crate::algo::coalesce;
use crate::script::{DiffEntry, EditSpan};

/// A strictly increasing list of `(old_index, new_index)` matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    pairs: Vec<(usize, usize)>,
    old_len: usize,
    new_len: usize,
}

impl Alignment {
    pub(crate) fn new(old_len: usize, new_len: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(old_len.min(new_len)),
            old_len,
            new_len,
        }
    }

    /// Record a match. Pairs must arrive in increasing order on both axes.
    #[inline]
    pub(crate) fn push(&mut self, old_idx: usize, new_idx: usize) {
        debug_assert!(old_idx < self.old_len && new_idx < self.new_len);
        debug_assert!(
            self.pairs.last().is_none_or(|&(i, j)| i < old_idx && j < new_idx),
            "alignment pairs must be strictly increasing"
        );
        self.pairs.push((old_idx, new_idx));
    }

    /// Record `len` consecutive diagonal matches starting at `(old_idx, new_idx)`.
    #[inline]
    pub(crate) fn push_run(&mut self, old_idx: usize, new_idx: usize, len: usize) {
        for k in 0..len {
            self.push(old_idx + k, new_idx + k);
        }
    }

    /// The matched pairs.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Number of matched elements (the common subsequence length).
    pub fn matched(&self) -> usize {
        self.pairs.len()
    }

    /// Length of the old sequence.
    pub fn old_len(&self) -> usize {
        self.old_len
    }

    /// Length of the new sequence.
    pub fn new_len(&self) -> usize {
        self.new_len
    }

    /// Render as one entry per element.
    ///
    /// `old` and `new` must be the sequences this alignment was built from.
    pub fn entries<T: Clone>(&self, old: &[T], new: &[T]) -> Vec<DiffEntry<T>> {
        assert_eq!((old.len(), new.len()), (self.old_len, self.new_len), "sequence length mismatch");

        let mut out = Vec::with_capacity(self.old_len + self.new_len - self.pairs.len());
        let (mut ia, mut jb) = (0, 0);

        for &(pa, pb) in self.pairs.iter().chain(std::iter::once(&(self.old_len, self.new_len))) {
            out.extend(old[ia..pa].iter().cloned().map(DiffEntry::remove));
            out.extend(new[jb..pb].iter().cloned().map(DiffEntry::insert));
            if pa < self.old_len {
                out.push(DiffEntry::stable(old[pa].clone()));
            }
            (ia, jb) = (pa + 1, pb + 1);
        }

        out
    }

    /// Render as coalesced run-length spans.
    pub fn spans<T: Clone>(&self, old: &[T], new: &[T]) -> Vec<EditSpan<T>> {
        assert_eq!((old.len(), new.len()), (self.old_len, self.new_len), "sequence length mismatch");

        let mut raw = Vec::with_capacity(2 * self.pairs.len() + 2);
        let (mut ia, mut jb) = (0, 0);

        for &(pa, pb) in self.pairs.iter().chain(std::iter::once(&(self.old_len, self.new_len))) {
            if pa > ia {
                raw.push(EditSpan::delete(ia, jb, pa - ia));
            }
            if pb > jb {
                raw.push(EditSpan::insert(pa, jb, new[jb..pb].to_vec()));
            }
            if pa < self.old_len {
                raw.push(EditSpan::matched(pa, pb, 1));
            }
            (ia, jb) = (pa + 1, pb + 1);
        }

        coalesce(raw)
    }
}
