//! Greedy heuristic differ.
//!
//! One left-to-right pass with two cursors. On a mismatch the cheaper
//! looking repair is taken immediately and never revisited:
//!
//! 1. Look ahead in old for the current new element. Found: everything
//!    skipped in old is removed.
//! 2. Otherwise look ahead in new for the current old element. Found:
//!    everything skipped in new is inserted.
//! 3. Neither: the rest of old is removed and the rest of new inserted.
//!
//! Removal is always tried first, so scripts lean towards removing.
//!
//! # Complexity
//!
//! - Time: O(n * m) worst case, O(n + m) on near-identical input
//! - Space: no matrix, only the output
//!
//! Not optimal: a single early match can lock in a long removal.

use crate::alignment::Alignment;
use crate::compare::Comparator;

/// Align `a` against `b` greedily, appending matches to `out`.
pub fn align<T, C>(a: &[T], b: &[T], (a_off, b_off): (usize, usize), cmp: &C, out: &mut Alignment)
where
    C: Comparator<T> + ?Sized,
{
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if cmp.equals(&a[i], &b[j]) {
            out.push(a_off + i, b_off + j);
            i += 1;
            j += 1;
        } else if let Some(skip) = a[i..].iter().position(|x| cmp.equals(x, &b[j])) {
            i += skip;
        } else if let Some(skip) = b[j..].iter().position(|y| cmp.equals(&a[i], y)) {
            j += skip;
        } else {
            // Nothing left to anchor on; the gap renders as removals then insertions
            break;
        }
    }
}
