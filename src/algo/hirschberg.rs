//! Hirschberg linear-space LCS.
//!
//! Fallback for inputs the exact matcher refuses (too many candidate
//! pairs) and for inputs with few or no exact matches.
//!
//! # Algorithm
//!
//! Split the old span at its midpoint. Score the left half against all of
//! the new span front-to-back and the right half back-to-front, keeping
//! only two rolling DP rows each. The column maximizing the sum of both
//! scores is where an optimal alignment crosses the midpoint, so each
//! half can be solved independently.
//!
//! # Complexity
//!
//! - Time: O(n * m)
//! - Space: O(m) rows plus O(log n) recursion

use crate::alignment::Alignment;
use crate::compare::Comparator;

// =============================================================================
// Row arena
// =============================================================================

/// DP rows for one top-level call.
///
/// Sized once to the widest row the call can need (`m + 1`) and reused by
/// every level of the recursion. Rows are leased for the duration of one
/// split computation and handed back before recursing.
struct RowArena {
    fwd: Vec<usize>,
    bwd: Vec<usize>,
    scratch: Vec<usize>,
}

/// Rows borrowed from a [`RowArena`], released when dropped.
struct RowLease<'a> {
    fwd: &'a mut [usize],
    bwd: &'a mut [usize],
    scratch: &'a mut [usize],
}

impl RowArena {
    fn new(width: usize) -> Self {
        tracing::trace!(width, "allocating hirschberg row arena");
        Self {
            fwd: vec![0; width],
            bwd: vec![0; width],
            scratch: vec![0; width],
        }
    }

    fn lease(&mut self, width: usize) -> RowLease<'_> {
        RowLease {
            fwd: &mut self.fwd[..width],
            bwd: &mut self.bwd[..width],
            scratch: &mut self.scratch[..width],
        }
    }
}

// =============================================================================
// Score rows
// =============================================================================

/// `row[j]` = LCS length of `a` and `b[..j]`.
///
/// # Panics
///
/// If `row` or `scratch` is shorter than `b.len() + 1`.
fn forward_row<T, C>(a: &[T], b: &[T], cmp: &C, row: &mut [usize], scratch: &mut [usize])
where
    C: Comparator<T> + ?Sized,
{
    let m = b.len();
    assert!(row.len() > m && scratch.len() > m, "score row shorter than {}", m + 1);

    let mut prev = &mut row[..=m];
    let mut cur = &mut scratch[..=m];
    prev.fill(0);

    for ai in a {
        cur[0] = 0;
        for j in 1..=m {
            cur[j] = if cmp.equals(ai, &b[j - 1]) {
                prev[j - 1] + 1
            } else {
                prev[j].max(cur[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    // After an odd number of swaps the final row lives in scratch
    if a.len() % 2 == 1 {
        cur.copy_from_slice(prev);
    }
}

/// `row[j]` = LCS length of `a` and `b[j..]`.
///
/// # Panics
///
/// If `row` or `scratch` is shorter than `b.len() + 1`.
fn backward_row<T, C>(a: &[T], b: &[T], cmp: &C, row: &mut [usize], scratch: &mut [usize])
where
    C: Comparator<T> + ?Sized,
{
    let m = b.len();
    assert!(row.len() > m && scratch.len() > m, "score row shorter than {}", m + 1);

    let mut prev = &mut row[..=m];
    let mut cur = &mut scratch[..=m];
    prev.fill(0);

    for ai in a.iter().rev() {
        cur[m] = 0;
        for j in (0..m).rev() {
            cur[j] = if cmp.equals(ai, &b[j]) {
                prev[j + 1] + 1
            } else {
                prev[j].max(cur[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    if a.len() % 2 == 1 {
        cur.copy_from_slice(prev);
    }
}

/// Column of `b` where an optimal alignment of `a` crosses `a`'s midpoint.
///
/// Ties go to the earliest column.
fn split_column<T, C>(a: &[T], b: &[T], mid: usize, cmp: &C, arena: &mut RowArena) -> usize
where
    C: Comparator<T> + ?Sized,
{
    let lease = arena.lease(b.len() + 1);
    forward_row(&a[..mid], b, cmp, lease.fwd, lease.scratch);
    backward_row(&a[mid..], b, cmp, lease.bwd, lease.scratch);

    let mut split = 0;
    let mut best = None;
    for (j, (f, r)) in lease.fwd.iter().zip(lease.bwd.iter()).enumerate() {
        let score = f + r;
        if best.is_none_or(|top| score > top) {
            best = Some(score);
            split = j;
        }
    }
    split
}

// =============================================================================
// Recursion
// =============================================================================

/// Align `a` against `b` in linear space, appending matches to `out`.
pub fn align<T, C>(a: &[T], b: &[T], (a_off, b_off): (usize, usize), cmp: &C, out: &mut Alignment)
where
    C: Comparator<T> + ?Sized,
{
    if a.is_empty() || b.is_empty() {
        return;
    }
    let mut arena = RowArena::new(b.len() + 1);
    recurse(a, b, a_off, b_off, cmp, &mut arena, out);
}

fn recurse<T, C>(
    mut a: &[T],
    mut b: &[T],
    mut a_off: usize,
    mut b_off: usize,
    cmp: &C,
    arena: &mut RowArena,
    out: &mut Alignment,
) where
    C: Comparator<T> + ?Sized,
{
    // Leading matches are always part of some optimal alignment
    while let (Some(x), Some(y)) = (a.first(), b.first()) {
        if !cmp.equals(x, y) {
            break;
        }
        out.push(a_off, b_off);
        (a, b) = (&a[1..], &b[1..]);
        (a_off, b_off) = (a_off + 1, b_off + 1);
    }

    if a.is_empty() || b.is_empty() {
        return;
    }

    if a.len() == 1 {
        if let Some(k) = b.iter().position(|y| cmp.equals(&a[0], y)) {
            out.push(a_off, b_off + k);
        }
        return;
    }

    if b.len() == 1 {
        if let Some(k) = a.iter().position(|x| cmp.equals(x, &b[0])) {
            out.push(a_off + k, b_off);
        }
        return;
    }

    let mid = a.len() / 2;
    let split = split_column(a, b, mid, cmp, arena);

    recurse(&a[..mid], &b[..split], a_off, b_off, cmp, arena, out);
    recurse(&a[mid..], &b[split..], a_off + mid, b_off + split, cmp, arena, out);
}
