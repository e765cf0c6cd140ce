//! Property-based tests for the diff entry points.
//!
//! Inputs are drawn from a small alphabet so that matches, repeats and
//! ambiguous alignments are common.

use proptest::prelude::*;
use seqdiff::{
    algo::coalesce, apply_script, apply_spans, diff_exact, diff_heuristic, diff_spans, ByKey, DiffConfig, DiffEntry,
    DiffKind, DiffStats, Differ, EditSpan, Natural,
};

const STRATEGIES: [seqdiff::Strategy; 5] = [
    seqdiff::Strategy::Exact,
    seqdiff::Strategy::LinearSpace,
    seqdiff::Strategy::Bidirectional,
    seqdiff::Strategy::Greedy,
    seqdiff::Strategy::Auto,
];

/// Reference LCS length by full dynamic programming.
fn lcs_len(a: &[u8], b: &[u8]) -> usize {
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp[a.len()][b.len()]
}

fn sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..40)
}

/// Old values in order from Stable and Remove entries.
fn old_side<T: Clone>(entries: &[DiffEntry<T>]) -> Vec<T> {
    entries
        .iter()
        .filter(|e| e.kind != DiffKind::Insert)
        .map(|e| e.value.clone())
        .collect()
}

proptest! {
    #[test]
    fn test_exact_round_trip(old in sequence(), new in sequence()) {
        let entries = diff_exact(&old, &new, &Natural);
        prop_assert_eq!(apply_script(&old, &entries).unwrap(), new);
        prop_assert_eq!(old_side(&entries), old);
    }

    #[test]
    fn test_heuristic_round_trip(old in sequence(), new in sequence()) {
        let entries = diff_heuristic(&old, &new, &Natural);
        prop_assert_eq!(apply_script(&old, &entries).unwrap(), new);
        prop_assert_eq!(old_side(&entries), old);
    }

    #[test]
    fn test_spans_round_trip(old in sequence(), new in sequence()) {
        let spans = diff_spans(&old, &new, &Natural);
        prop_assert_eq!(apply_spans(&old, &spans).unwrap(), new);
    }

    #[test]
    fn test_every_strategy_round_trips(old in sequence(), new in sequence()) {
        for strategy in STRATEGIES {
            let differ = Differ::with_config(Natural, DiffConfig::new(strategy));
            let entries = differ.entries(&old, &new);
            let spans = differ.spans(&old, &new);
            prop_assert_eq!(&apply_script(&old, &entries).unwrap(), &new);
            prop_assert_eq!(&apply_spans(&old, &spans).unwrap(), &new);
        }
    }

    #[test]
    fn test_optimal_strategies(old in sequence(), new in sequence()) {
        let optimal = lcs_len(&old, &new);

        prop_assert_eq!(DiffStats::from_entries(&diff_exact(&old, &new, &Natural)).kept, optimal);
        prop_assert_eq!(DiffStats::from_spans(&diff_spans(&old, &new, &Natural)).kept, optimal);
        for strategy in STRATEGIES.into_iter().filter(|s| *s != seqdiff::Strategy::Greedy) {
            let differ = Differ::with_config(Natural, DiffConfig::new(strategy));
            prop_assert_eq!(differ.alignment(&old, &new).matched(), optimal);
        }
    }

    #[test]
    fn test_budget_fallback_is_optimal(old in sequence(), new in sequence(), budget in 0usize..8) {
        let optimal = lcs_len(&old, &new);
        for config in [
            DiffConfig::new(seqdiff::Strategy::Exact).with_match_budget(budget),
            DiffConfig::new(seqdiff::Strategy::Auto).with_match_budget(budget).with_max_fallback_cells(0),
        ] {
            let differ = Differ::with_config(Natural, config);
            prop_assert_eq!(differ.alignment(&old, &new).matched(), optimal);
        }
    }

    #[test]
    fn test_heuristic_never_beats_exact(old in sequence(), new in sequence()) {
        let heuristic = DiffStats::from_entries(&diff_heuristic(&old, &new, &Natural));
        prop_assert!(heuristic.kept <= lcs_len(&old, &new));
    }

    #[test]
    fn test_identical_is_all_stable(seq in sequence()) {
        for strategy in STRATEGIES {
            let entries = Differ::with_config(Natural, DiffConfig::new(strategy)).entries(&seq, &seq);
            prop_assert!(entries.iter().all(DiffEntry::is_stable));
            prop_assert_eq!(entries.len(), seq.len());
        }
        let spans = diff_spans(&seq, &seq, &Natural);
        prop_assert!(spans.len() <= 1);
    }

    #[test]
    fn test_empty_sides(seq in sequence()) {
        let inserted = diff_exact(&[], &seq, &Natural);
        prop_assert!(inserted.iter().all(|e| e.kind == DiffKind::Insert));
        prop_assert_eq!(inserted.len(), seq.len());

        let removed = diff_heuristic(&seq, &[], &Natural);
        prop_assert!(removed.iter().all(|e| e.kind == DiffKind::Remove));
        prop_assert_eq!(removed.len(), seq.len());
    }

    #[test]
    fn test_coalesce_idempotent(old in sequence(), new in sequence()) {
        let once = diff_spans(&old, &new, &Natural);
        let twice = coalesce(once.clone());
        prop_assert_eq!(&once, &twice);

        // no two neighbours are left mergeable
        for pair in once.windows(2) {
            prop_assert!(pair[0].kind != pair[1].kind || pair[0].old_end() != pair[1].old_start
                || pair[0].new_end() != pair[1].new_start);
        }
    }

    #[test]
    fn test_stable_values_come_from_old(old in sequence(), new in sequence()) {
        // compare by parity only, so stable entries must prove which side they came from
        let parity = ByKey::new(|x: &u8| x % 2);
        let entries = diff_exact(&old, &new, &parity);
        prop_assert_eq!(old_side(&entries), old);
    }
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn test_scenario_one_removed_one_inserted() {
    let entries = diff_exact(&[0, 1, 2, 3, 4, 5], &[0, 2, 3, 4, 5, 6], &Natural);
    assert_eq!(
        entries,
        vec![
            DiffEntry::stable(0),
            DiffEntry::remove(1),
            DiffEntry::stable(2),
            DiffEntry::stable(3),
            DiffEntry::stable(4),
            DiffEntry::stable(5),
            DiffEntry::insert(6),
        ]
    );
}

#[test]
fn test_scenario_identical() {
    let entries = diff_exact(&[1, 2, 3], &[1, 2, 3], &Natural);
    assert_eq!(entries, vec![DiffEntry::stable(1), DiffEntry::stable(2), DiffEntry::stable(3)]);
}

#[test]
fn test_scenario_empty_old() {
    let entries = diff_exact(&[], &[1, 2, 3], &Natural);
    assert_eq!(entries, vec![DiffEntry::insert(1), DiffEntry::insert(2), DiffEntry::insert(3)]);
}

#[test]
fn test_scenario_mod_ten() {
    let entries = diff_exact(&[10, 21, 32], &[0, 1, 2], &ByKey::new(|x: &i32| x % 10));
    assert_eq!(entries, vec![DiffEntry::stable(10), DiffEntry::stable(21), DiffEntry::stable(32)]);
}

#[test]
fn test_scenario_spans() {
    let spans = diff_spans(&[0, 1, 2, 3, 4, 5], &[0, 2, 3, 4, 5, 6], &Natural);
    assert_eq!(
        spans,
        vec![
            EditSpan::matched(0, 0, 1),
            EditSpan::delete(1, 1, 1),
            EditSpan::matched(2, 1, 4),
            EditSpan::insert(6, 5, vec![6]),
        ]
    );
}

#[test]
fn test_large_low_selectivity_input() {
    // nothing to trim, and 600 * 598 candidate pairs exceed a 100k budget
    let old = vec![7u8; 600];
    let mut new = vec![7u8; 600];
    new[0] = 8;
    new[599] = 9;

    let differ = Differ::with_config(Natural, DiffConfig::small().with_match_budget(100_000));
    let entries = differ.entries(&old, &new);
    assert_eq!(DiffStats::from_entries(&entries), DiffStats { kept: 598, inserted: 2, removed: 2 });
    assert_eq!(apply_script(&old, &entries).unwrap(), new);
}
