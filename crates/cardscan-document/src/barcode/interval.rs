// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Splitting a row's dark-pixel columns into bar candidates.

use super::model::Interval;

/// Slack allowed between the observed and expected barcode span, in pixels.
const SPAN_TOLERANCE: u32 = 1;

/// Group ascending, distinct x-coordinates into runs of consecutive columns.
///
/// Only columns within `max_span` of the first one are considered. If the last
/// of those does not land within [`SPAN_TOLERANCE`] of `xs[0] + max_span`, the
/// row cannot hold a barcode of that width and nothing is returned.
pub fn divide(xs: &[u32], max_span: u32) -> Vec<Interval> {
    let Some(&base) = xs.first() else {
        return Vec::new();
    };
    let limit = u64::from(base) + u64::from(max_span);
    let window_len = xs.partition_point(|&x| u64::from(x) <= limit);
    let window = &xs[..window_len];

    // window is never empty: base itself is always inside it.
    let last = window[window_len - 1];
    if u64::from(last).abs_diff(limit) > u64::from(SPAN_TOLERANCE) {
        return Vec::new();
    }

    let mut intervals = Vec::new();
    let mut run_start = base;
    for pair in window.windows(2) {
        if pair[1] - pair[0] > 1 {
            intervals.push(Interval::new(run_start, pair[0]));
            run_start = pair[1];
        }
    }
    intervals.push(Interval::new(run_start, last));
    intervals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_yields_nothing() {
        assert!(divide(&[], 10).is_empty());
    }

    #[test]
    fn window_short_of_expected_span_rejected() {
        // Window {0, 5} ends 5px short of 0 + 10.
        assert!(divide(&[0, 5, 40], 10).is_empty());
    }

    #[test]
    fn splits_on_gaps() {
        assert_eq!(
            divide(&[0, 1, 2, 7, 8, 9], 9),
            vec![Interval::new(0, 2), Interval::new(7, 9)]
        );
    }

    #[test]
    fn one_pixel_jitter_tolerated_either_side() {
        let xs = [3, 4, 5, 9, 10, 11, 12];
        // Observed span is 9.
        assert_eq!(divide(&xs, 8).len(), 2);
        assert_eq!(divide(&xs, 10).len(), 2);
        assert!(divide(&xs, 11).is_empty());
        // Cut off inside the gap after 5.
        assert!(divide(&xs, 4).is_empty());
    }

    #[test]
    fn columns_past_window_ignored() {
        // 30..=31 lie beyond 10 + 5 and belong to something else on the row.
        assert_eq!(
            divide(&[10, 11, 14, 15, 30, 31], 5),
            vec![Interval::new(10, 11), Interval::new(14, 15)]
        );
    }

    #[test]
    fn single_solid_run_is_one_interval() {
        let xs: Vec<u32> = (20..=40).collect();
        assert_eq!(divide(&xs, 20), vec![Interval::new(20, 40)]);
    }

    #[test]
    fn lone_pixel_with_zero_span() {
        assert_eq!(divide(&[7], 0), vec![Interval::new(7, 7)]);
    }
}
