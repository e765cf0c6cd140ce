//! Myers bidirectional middle-snake diff.
//!
//! Independent backend producing run-length spans directly.
//!
//! # Algorithm
//!
//! Explore the edit graph by edit distance `d`, tracking the furthest
//! reaching `x` per diagonal `k = x - y`, from both corners at once.
//! Where a forward and a backward path first overlap lies the middle
//! snake: a diagonal run that some shortest edit script passes through.
//! Recurse on the rectangles before and after it.
//!
//! | Variant | Time | Space |
//! |---------|------|-------|
//! | Greedy with trace | O((n+m)*d) | O(d*(n+m)) |
//! | **Middle snake** | O((n+m)*d) | **O(n+m)** |
//!
//! Near-linear on similar inputs, which is where it beats the
//! linear-space DP splitter.
//!
//! # References
//!
//! - Myers, E.W. "An O(ND) Difference Algorithm and Its Variations" (1986)

use std::ops::{Index, IndexMut, Range};

use crate::alignment::Alignment;
use crate::algo::trim::Trim;
use crate::compare::Comparator;
use crate::script::{EditSpan, SpanKind};

// =============================================================================
// Frontier
// =============================================================================

/// Furthest reaching `x` per diagonal, indexed by signed `k`.
struct Frontier {
    data: Vec<usize>,
    offset: isize,
}

impl Frontier {
    fn new(max_d: usize) -> Self {
        Self {
            data: vec![0; 2 * max_d + 3],
            offset: max_d as isize + 1,
        }
    }
}

impl Index<isize> for Frontier {
    type Output = usize;

    #[inline]
    fn index(&self, k: isize) -> &usize {
        &self.data[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    #[inline]
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.data[(k + self.offset) as usize]
    }
}

/// Edit-distance bound for a rectangle of `n` by `m`.
#[inline]
fn max_d(n: usize, m: usize) -> usize {
    (n + m).div_ceil(2) + 1
}

// =============================================================================
// Snakes
// =============================================================================

/// A diagonal run of matches, absolute indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snake {
    x: usize,
    y: usize,
    len: usize,
}

/// One run emitted by the recursion, before items are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    kind: SpanKind,
    old: usize,
    new: usize,
    len: usize,
}

fn common_prefix<T, C>(a: &[T], b: &[T], cmp: &C) -> usize
where
    C: Comparator<T> + ?Sized,
{
    a.iter().zip(b).take_while(|(x, y)| cmp.equals(x, y)).count()
}

fn common_suffix<T, C>(a: &[T], b: &[T], cmp: &C) -> usize
where
    C: Comparator<T> + ?Sized,
{
    a.iter().rev().zip(b.iter().rev()).take_while(|(x, y)| cmp.equals(x, y)).count()
}

/// Locate the middle snake of `a[ar]` vs `b[br]`.
///
/// Both ranges must be non-empty. Returns `None` only if the frontiers
/// never meet, which a valid comparator rules out.
fn middle_snake<T, C>(
    a: &[T],
    ar: Range<usize>,
    b: &[T],
    br: Range<usize>,
    cmp: &C,
    vf: &mut Frontier,
    vb: &mut Frontier,
) -> Option<Snake>
where
    C: Comparator<T> + ?Sized,
{
    let n = ar.len();
    let m = br.len();
    let delta = n as isize - m as isize;
    let odd = delta & 1 == 1;

    vf[1] = 0;
    vb[1] = 0;

    for d in 0..max_d(n, m) as isize {
        // Forward half-step from the top-left corner
        for k in (-d..=d).rev().step_by(2) {
            let x0 = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y0 = (x0 as isize - k) as usize;
            let mut x = x0;
            if x0 < n && y0 < m {
                x += common_prefix(&a[ar.start + x0..ar.end], &b[br.start + y0..br.end], cmp);
            }
            vf[k] = x;

            // Backward diagonal k' = delta - k; overlap possible from d - 1 steps back
            if odd && (k - delta).abs() <= d - 1 && vf[k] + vb[delta - k] >= n {
                return Some(Snake {
                    x: ar.start + x0,
                    y: br.start + y0,
                    len: x - x0,
                });
            }
        }

        // Backward half-step from the bottom-right corner, x counted from the end
        for k in (-d..=d).rev().step_by(2) {
            let x0 = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let y0 = (x0 as isize - k) as usize;
            let mut x = x0;
            if x0 < n && y0 < m {
                x += common_suffix(&a[ar.start..ar.end - x0], &b[br.start..br.end - y0], cmp);
            }
            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[delta - k] >= n {
                let y = (x as isize - k) as usize;
                return Some(Snake {
                    x: ar.end - x,
                    y: br.end - y,
                    len: x - x0,
                });
            }
        }
    }

    None
}

// =============================================================================
// Recursion
// =============================================================================

struct Engine<'a, T, C: ?Sized> {
    a: &'a [T],
    b: &'a [T],
    cmp: &'a C,
    vf: Frontier,
    vb: Frontier,
    runs: Vec<Run>,
}

impl<'a, T, C> Engine<'a, T, C>
where
    C: Comparator<T> + ?Sized,
{
    fn new(a: &'a [T], b: &'a [T], cmp: &'a C) -> Self {
        let bound = max_d(a.len(), b.len());
        Self {
            a,
            b,
            cmp,
            vf: Frontier::new(bound),
            vb: Frontier::new(bound),
            runs: Vec::new(),
        }
    }

    fn emit(&mut self, kind: SpanKind, old: usize, new: usize, len: usize) {
        if len > 0 {
            self.runs.push(Run { kind, old, new, len });
        }
    }

    fn recurse(&mut self, mut ar: Range<usize>, mut br: Range<usize>) {
        // Forward snake
        let head = common_prefix(&self.a[ar.clone()], &self.b[br.clone()], self.cmp);
        self.emit(SpanKind::Match, ar.start, br.start, head);
        ar.start += head;
        br.start += head;

        // Backward snake, emitted after everything in between
        let tail = common_suffix(&self.a[ar.clone()], &self.b[br.clone()], self.cmp);
        ar.end -= tail;
        br.end -= tail;

        let (a_end, b_end) = (ar.end, br.end);

        if ar.is_empty() {
            self.emit(SpanKind::Insert, ar.start, br.start, br.len());
        } else if br.is_empty() {
            self.emit(SpanKind::Delete, ar.start, br.start, ar.len());
        } else {
            let snake = middle_snake(self.a, ar.clone(), self.b, br.clone(), self.cmp, &mut self.vf, &mut self.vb);
            match snake {
                Some(s) if s.len > 0 || ((s.x, s.y) != (ar.start, br.start) && (s.x, s.y) != (a_end, b_end)) => {
                    self.recurse(ar.start..s.x, br.start..s.y);
                    self.emit(SpanKind::Match, s.x, s.y, s.len);
                    self.recurse(s.x + s.len..a_end, s.y + s.len..b_end);
                }
                _ => {
                    let (ar, br) = self.peel(ar, br);
                    self.recurse(ar, br);
                }
            }
        }

        self.emit(SpanKind::Match, a_end, b_end, tail);
    }

    /// Emit a single edit off the longer side (Delete on a tie) and return
    /// the ranges left to diff.
    fn peel(&mut self, ar: Range<usize>, br: Range<usize>) -> (Range<usize>, Range<usize>) {
        if ar.len() >= br.len() {
            self.emit(SpanKind::Delete, ar.start, br.start, 1);
            (ar.start + 1..ar.end, br)
        } else {
            self.emit(SpanKind::Insert, ar.start, br.start, 1);
            (ar, br.start + 1..br.end)
        }
    }
}

/// Trim, then run the middle-snake recursion over the residual.
fn runs<T, C>(a: &[T], b: &[T], cmp: &C) -> Vec<Run>
where
    C: Comparator<T> + ?Sized,
{
    let trim = Trim::compute(a, b, cmp);
    let mut engine = Engine::new(trim.middle(a), trim.middle(b), cmp);
    let (n, m) = (engine.a.len(), engine.b.len());
    engine.recurse(0..n, 0..m);

    let mut runs = Vec::with_capacity(engine.runs.len() + 2);
    if trim.prefix > 0 {
        runs.push(Run { kind: SpanKind::Match, old: 0, new: 0, len: trim.prefix });
    }
    runs.extend(engine.runs.into_iter().map(|run| Run {
        old: run.old + trim.prefix,
        new: run.new + trim.prefix,
        ..run
    }));
    if trim.suffix > 0 {
        runs.push(Run {
            kind: SpanKind::Match,
            old: a.len() - trim.suffix,
            new: b.len() - trim.suffix,
            len: trim.suffix,
        });
    }
    runs
}

// =============================================================================
// Public entry points
// =============================================================================

/// Diff `a` against `b` into uncoalesced spans, Insert spans carrying items.
pub fn spans<T, C>(a: &[T], b: &[T], cmp: &C) -> Vec<EditSpan<T>>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    attach_items(runs(a, b, cmp), b)
}

/// Turn runs into spans, copying inserted values out of `b`.
fn attach_items<T: Clone>(runs: Vec<Run>, b: &[T]) -> Vec<EditSpan<T>> {
    runs.into_iter()
        .map(|run| match run.kind {
            SpanKind::Match => EditSpan::matched(run.old, run.new, run.len),
            SpanKind::Delete => EditSpan::delete(run.old, run.new, run.len),
            SpanKind::Insert => EditSpan::insert(run.old, run.new, b[run.new..run.new + run.len].to_vec()),
        })
        .collect()
}

/// Align `a` against `b`, appending the matched runs to `out`.
pub fn align<T, C>(a: &[T], b: &[T], (a_off, b_off): (usize, usize), cmp: &C, out: &mut Alignment)
where
    C: Comparator<T> + ?Sized,
{
    for run in runs(a, b, cmp) {
        if run.kind == SpanKind::Match {
            out.push_run(a_off + run.old, b_off + run.new, run.len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::coalesce;
    use crate::compare::Natural;
    use crate::script::{apply_spans, DiffStats};

    fn edit_distance(a: &[u8], b: &[u8]) -> usize {
        let mut out = Alignment::new(a.len(), b.len());
        align(a, b, (0, 0), &Natural, &mut out);
        a.len() + b.len() - 2 * out.matched()
    }

    #[test]
    fn test_spans_scenario() {
        let old = [0, 1, 2, 3, 4, 5];
        let new = [0, 2, 3, 4, 5, 6];
        let result = coalesce(spans(&old, &new, &Natural));

        assert_eq!(
            result,
            vec![
                EditSpan::matched(0, 0, 1),
                EditSpan::delete(1, 1, 1),
                EditSpan::matched(2, 1, 4),
                EditSpan::insert(6, 5, vec![6]),
            ]
        );
    }

    #[test]
    fn test_middle_snake_found() {
        // abcabba -> cbabac: the classic example from the paper
        let a = b"abcabba";
        let b = b"cbabac";
        let bound = max_d(a.len(), b.len());
        let (mut vf, mut vb) = (Frontier::new(bound), Frontier::new(bound));
        let snake = middle_snake(a, 0..7, b, 0..6, &Natural, &mut vf, &mut vb).unwrap();

        assert!(snake.x <= 7 && snake.y <= 6);
        assert_eq!(&a[snake.x..snake.x + snake.len], &b[snake.y..snake.y + snake.len]);
    }

    #[test]
    fn test_minimal_edit_distance() {
        assert_eq!(edit_distance(b"abcabba", b"cbabac"), 5);
        assert_eq!(edit_distance(b"kitten", b"sitting"), 5);
        assert_eq!(edit_distance(b"", b"abc"), 3);
        assert_eq!(edit_distance(b"abc", b"abc"), 0);
        assert_eq!(edit_distance(b"ab", b"ba"), 2);
    }

    #[test]
    fn test_completely_different() {
        let old = ['a', 'b', 'c'];
        let new = ['x', 'y', 'z'];
        let result = coalesce(spans(&old, &new, &Natural));

        assert!(result.iter().all(|span| span.kind != SpanKind::Match));
        assert_eq!(
            DiffStats::from_spans(&result),
            DiffStats { kept: 0, inserted: 3, removed: 3 }
        );
        assert_eq!(apply_spans(&old, &result).unwrap(), new.to_vec());
    }

    #[test]
    fn test_round_trip() {
        let cases: [(&[u8], &[u8]); 6] = [
            (b"abcabba", b"cbabac"),
            (b"", b"xyz"),
            (b"xyz", b""),
            (b"aaaaaaa", b"aaa"),
            (b"the quick brown fox", b"the quack brawn fix"),
            (b"abcdefgh", b"hgfedcba"),
        ];
        for (a, b) in cases {
            let result = spans(a, b, &Natural);
            assert_eq!(apply_spans(a, &result).unwrap(), b.to_vec());
        }
    }

    #[test]
    fn test_peel_prefers_delete_on_longer_or_equal_old() {
        let (a, b) = (*b"xyz", *b"pq");
        let mut engine = Engine::new(&a, &b, &Natural);

        let (ar, br) = engine.peel(0..3, 0..2);
        assert_eq!((ar, br), (1..3, 0..2));
        let (ar, br) = engine.peel(1..3, 0..2);
        assert_eq!((ar, br), (2..3, 0..2));
        assert_eq!(
            engine.runs,
            vec![
                Run { kind: SpanKind::Delete, old: 0, new: 0, len: 1 },
                Run { kind: SpanKind::Delete, old: 1, new: 0, len: 1 },
            ]
        );
    }

    #[test]
    fn test_peel_inserts_when_new_is_longer() {
        let (a, b) = (*b"x", *b"pqr");
        let mut engine = Engine::new(&a, &b, &Natural);

        let (ar, br) = engine.peel(0..1, 0..3);
        assert_eq!((ar, br), (0..1, 1..3));
        assert_eq!(engine.runs, vec![Run { kind: SpanKind::Insert, old: 0, new: 0, len: 1 }]);
    }

    #[test]
    fn test_peeled_script_round_trips() {
        // peel by hand, then let the recursion finish the remainder
        let (a, b) = (*b"abcd", *b"xbcd");
        let mut engine = Engine::new(&a, &b, &Natural);
        let (ar, br) = engine.peel(0..4, 0..4);
        engine.recurse(ar, br);

        let result = attach_items(engine.runs, &b);
        assert_eq!(
            result,
            vec![
                EditSpan::delete(0, 0, 1),
                EditSpan::insert(1, 0, vec![b'x']),
                EditSpan::matched(1, 1, 3),
            ]
        );
        assert_eq!(apply_spans(&a, &coalesce(result)).unwrap(), b.to_vec());
    }

    #[test]
    fn test_runs_are_ordered() {
        let result = runs(b"abcabba", b"cbabac", &Natural);
        for pair in result.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            let prev_old_end = prev.old + if prev.kind == SpanKind::Insert { 0 } else { prev.len };
            let prev_new_end = prev.new + if prev.kind == SpanKind::Delete { 0 } else { prev.len };
            assert_eq!(next.old, prev_old_end);
            assert_eq!(next.new, prev_new_end);
        }
    }
}
