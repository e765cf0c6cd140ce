//! Run-length span coalescing.
//!
//! Backends emit spans one run at a time, often in fragments (a Match of
//! one element followed by another Match of the next). Coalescing merges
//! every index-contiguous pair of same-kind spans:
//!
//! | Kind | Merged when |
//! |------|-------------|
//! | Match | both old and new indices continue |
//! | Delete | old index continues |
//! | Insert | new index continues (items are concatenated) |
//!
//! Zero-length spans are dropped. Coalescing a coalesced script is a no-op.

use crate::script::{EditSpan, SpanKind};

/// Whether `next` continues `prev` without a gap.
fn continues<T>(prev: &EditSpan<T>, next: &EditSpan<T>) -> bool {
    if prev.kind != next.kind {
        return false;
    }
    match next.kind {
        SpanKind::Match => prev.old_end() == next.old_start && prev.new_end() == next.new_start,
        SpanKind::Delete => prev.old_end() == next.old_start,
        SpanKind::Insert => prev.new_end() == next.new_start,
    }
}

/// Merge adjacent same-kind spans into maximal runs.
pub fn coalesce<T>(spans: Vec<EditSpan<T>>) -> Vec<EditSpan<T>> {
    let mut out: Vec<EditSpan<T>> = Vec::with_capacity(spans.len());

    for span in spans.into_iter().filter(|span| span.len > 0) {
        match out.last_mut() {
            Some(prev) if continues(prev, &span) => {
                prev.len += span.len;
                prev.items = match (prev.items.take(), span.items) {
                    (Some(mut head), Some(tail)) => {
                        head.extend(tail);
                        Some(head)
                    }
                    // One side lost its values, so the merged run has none either
                    _ => None,
                };
            }
            _ => out.push(span),
        }
    }

    out
}
