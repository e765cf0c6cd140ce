//! Common prefix/suffix trimming.
//!
//! Every strategy starts here. Shared leading and trailing runs are
//! matched on the diagonal without further work, leaving only the
//! irreducible middle for the heavier algorithms.

use crate::compare::Comparator;

/// Lengths of the shared prefix and suffix of two sequences.
///
/// `prefix + suffix <= min(old.len(), new.len())`: the suffix scan never
/// re-enters the prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trim {
    /// Shared leading elements
    pub prefix: usize,
    /// Shared trailing elements
    pub suffix: usize,
}

impl Trim {
    /// Measure the shared prefix and suffix of `old` and `new`.
    pub fn compute<T, C>(old: &[T], new: &[T], cmp: &C) -> Self
    where
        C: Comparator<T> + ?Sized,
    {
        let n = old.len();
        let m = new.len();

        let mut prefix = 0;
        while prefix < n && prefix < m && cmp.equals(&old[prefix], &new[prefix]) {
            prefix += 1;
        }

        let mut suffix = 0;
        while prefix + suffix < n
            && prefix + suffix < m
            && cmp.equals(&old[n - 1 - suffix], &new[m - 1 - suffix])
        {
            suffix += 1;
        }

        Self { prefix, suffix }
    }

    /// The untrimmed middle of `seq`.
    #[inline]
    pub fn middle<'a, T>(&self, seq: &'a [T]) -> &'a [T] {
        &seq[self.prefix..seq.len() - self.suffix]
    }

    /// Whether the whole of both sequences is shared.
    pub fn covers(&self, old_len: usize, new_len: usize) -> bool {
        self.prefix + self.suffix == old_len && old_len == new_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Natural;

    #[test]
    fn test_prefix_and_suffix() {
        let old = [1, 2, 3, 4, 5, 100];
        let new = [1, 2, 3, 4, 5, 200];
        assert_eq!(Trim::compute(&old, &new, &Natural), Trim { prefix: 5, suffix: 0 });

        let old = [100, 1, 2, 3];
        let new = [200, 1, 2, 3];
        assert_eq!(Trim::compute(&old, &new, &Natural), Trim { prefix: 0, suffix: 3 });
    }

    #[test]
    fn test_no_overlap() {
        // "aaa" vs "aa": the suffix must not re-count the prefix
        let old = ['a', 'a', 'a'];
        let new = ['a', 'a'];
        let trim = Trim::compute(&old, &new, &Natural);
        assert_eq!(trim, Trim { prefix: 2, suffix: 0 });
        assert_eq!(trim.middle(&old), &['a']);
        assert!(trim.middle(&new).is_empty());
    }

    #[test]
    fn test_identical() {
        let seq = [1, 2, 3];
        let trim = Trim::compute(&seq, &seq, &Natural);
        assert_eq!(trim.prefix, 3);
        assert!(trim.covers(3, 3));
    }

    #[test]
    fn test_empty() {
        let trim = Trim::compute::<u8, _>(&[], &[1, 2], &Natural);
        assert_eq!(trim, Trim::default());
        assert!(!trim.covers(0, 2));
        assert!(Trim::default().covers(0, 0));
    }

    #[test]
    fn test_middle() {
        let old = [0, 1, 2, 3, 4, 5];
        let new = [0, 2, 3, 4, 5, 6];
        let trim = Trim::compute(&old, &new, &Natural);
        assert_eq!(trim, Trim { prefix: 1, suffix: 0 });
        assert_eq!(trim.middle(&old), &[1, 2, 3, 4, 5]);
        assert_eq!(trim.middle(&new), &[2, 3, 4, 5, 6]);
    }
}
