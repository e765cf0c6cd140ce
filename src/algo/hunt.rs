//! Hunt-Szymanski exact LCS.
//!
//! Reduces LCS to a longest strictly increasing subsequence:
//!
//! 1. Index every position of the new sequence by value.
//! 2. For each old element `i`, list the new positions `j` it matches,
//!    in *decreasing* order, so two candidates from the same `i` can never
//!    both sit in an increasing run.
//! 3. Patience-sort the concatenated `j` values. The longest strictly
//!    increasing run is the LCS: `i` increases by construction, `j` by the
//!    LIS.
//!
//! # Complexity
//!
//! - Time: O((r + n) log n) where r is the number of candidate pairs
//! - Space: O(r + m)
//!
//! r is quadratic on low-selectivity input (all-equal elements), so the
//! matcher refuses to run past a candidate budget and the caller falls
//! back to the linear-space splitter.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::alignment::Alignment;
use crate::compare::HashComparator;

/// Marker for a missing predecessor in the LIS chain.
const NO_PREV: usize = usize::MAX;

/// The candidate count exceeded the configured budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverBudget {
    /// Candidate pairs the matcher would have had to sort
    pub total_matches: usize,
}

// =============================================================================
// Position index
// =============================================================================

/// Positions of one equivalence class, in increasing order.
type Positions = SmallVec<[usize; 4]>;

/// Maps each distinct value of a sequence to the positions holding it.
///
/// Values are bucketed by the comparator's hash; buckets sharing a hash
/// are told apart by comparing against their first position.
struct PositionIndex<'a, T, C: ?Sized> {
    seq: &'a [T],
    cmp: &'a C,
    buckets: FxHashMap<u64, SmallVec<[Positions; 1]>>,
}

impl<'a, T, C> PositionIndex<'a, T, C>
where
    C: HashComparator<T> + ?Sized,
{
    fn build(seq: &'a [T], cmp: &'a C) -> Self {
        let mut buckets: FxHashMap<u64, SmallVec<[Positions; 1]>> = FxHashMap::default();
        buckets.reserve(seq.len());

        for (j, value) in seq.iter().enumerate() {
            let classes = buckets.entry(cmp.hash_of(value)).or_default();
            match classes.iter_mut().find(|class| cmp.equals(&seq[class[0]], value)) {
                Some(class) => class.push(j),
                None => classes.push(smallvec::smallvec![j]),
            }
        }

        Self { seq, cmp, buckets }
    }

    fn positions(&self, value: &T) -> &[usize] {
        self.buckets
            .get(&self.cmp.hash_of(value))
            .and_then(|classes| classes.iter().find(|class| self.cmp.equals(&self.seq[class[0]], value)))
            .map(|class| class.as_slice())
            .unwrap_or_default()
    }
}

// =============================================================================
// Matcher
// =============================================================================

/// Align `a` against `b` exactly, appending matches to `out`.
///
/// Indices are shifted by `a_off`/`b_off` before being recorded. Nothing
/// is recorded when the budget is exceeded.
pub fn align<T, C>(
    a: &[T],
    b: &[T],
    (a_off, b_off): (usize, usize),
    cmp: &C,
    budget: usize,
    out: &mut Alignment,
) -> Result<(), OverBudget>
where
    C: HashComparator<T> + ?Sized,
{
    if a.is_empty() || b.is_empty() {
        return Ok(());
    }

    let index = PositionIndex::build(b, cmp);
    let candidates: Vec<&[usize]> = a.iter().map(|value| index.positions(value)).collect();
    let total_matches: usize = candidates.iter().map(|js| js.len()).sum();

    if total_matches == 0 {
        return Ok(());
    }
    if total_matches > budget {
        return Err(OverBudget { total_matches });
    }

    // Flatten candidates: decreasing j within each i
    let mut js = Vec::with_capacity(total_matches);
    let mut is = Vec::with_capacity(total_matches);
    for (i, positions) in candidates.iter().enumerate() {
        for &j in positions.iter().rev() {
            js.push(j);
            is.push(i);
        }
    }

    // Patience sort: tails[k] is the smallest j ending an increasing run of length k + 1
    let max_len = a.len().min(b.len());
    let mut tails_val: Vec<usize> = Vec::with_capacity(max_len);
    let mut tails_ptr: Vec<usize> = Vec::with_capacity(max_len);
    let mut prev = vec![NO_PREV; js.len()];

    for (t, &j) in js.iter().enumerate() {
        let pos = tails_val.partition_point(|&tail| tail < j);
        if pos == tails_val.len() {
            tails_val.push(j);
            tails_ptr.push(t);
        } else {
            tails_val[pos] = j;
            tails_ptr[pos] = t;
        }
        if pos > 0 {
            prev[t] = tails_ptr[pos - 1];
        }
    }

    // Backtrack the chain ending at the longest pile
    let mut chain = Vec::with_capacity(tails_ptr.len());
    let mut cur = tails_ptr.last().copied().unwrap_or(NO_PREV);
    while cur != NO_PREV {
        chain.push(cur);
        cur = prev[cur];
    }

    for &t in chain.iter().rev() {
        out.push(a_off + is[t], b_off + js[t]);
    }

    Ok(())
}
