//! Property-based invariant tests for window computation.
//!
//! 1. offset_of(0) == 0 and offset_of(len) == total_extent().
//! 2. offset_of(i + 1) - offset_of(i) == size_of(i).
//! 3. The window covers every item overlapping the viewport (no gaps).
//! 4. The window is structurally valid for any scroll offset, including past the end.
//! 5. scroll_to_index(k) always lands with k inside the window.
//! 6. Replacing the collection never yields an index past the new end.
//! 7. The coalescer applies the last signal of every burst.
//! 8. Properties 1-3 hold for fractional sizes (exact total, relative step tolerance).

use proptest::prelude::*;
use windowed_list::{
    Align, ItemSize, ListWindow, Overscan, ScrollBehavior, ScrollCoalescer, WindowOptions,
    WindowedList, WindowedListOptions,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn sizes(max_len: usize) -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(1u32..=200, 1..=max_len)
}

fn fractional_sizes(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.25f64..200.0, 1..=max_len)
}

fn as_f64(sizes: &[u32]) -> Vec<f64> {
    sizes.iter().map(|&s| s as f64).collect()
}

fn dynamic_window(sizes: &[f64], viewport: f64, overscan: Overscan) -> ListWindow {
    let estimates = sizes.to_vec();
    ListWindow::new(
        WindowOptions::dynamic(sizes.len(), move |i| estimates[i])
            .with_viewport_length(viewport)
            .with_overscan(overscan),
    )
}

fn overlapping(sizes: &[f64], scroll: f64, viewport: f64) -> Vec<usize> {
    let mut out = Vec::new();
    let mut start = 0.0;
    for (i, &size) in sizes.iter().enumerate() {
        let end = start + size;
        if start < scroll + viewport && end > scroll {
            out.push(i);
        }
        start = end;
    }
    out
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Offsets are consistent with sizes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offsets_are_consistent(raw in sizes(200), measured in proptest::collection::vec((0usize..200, 1u32..=300), 0..20)) {
        let sizes = as_f64(&raw);
        let mut w = dynamic_window(&sizes, 100.0, Overscan::default());
        for (i, size) in measured {
            if i < sizes.len() {
                w.measure(i, size as f64).unwrap();
            }
        }

        prop_assert_eq!(w.offset_of(0), 0.0);
        prop_assert_eq!(w.offset_of(sizes.len()), w.total_extent());
        for i in 0..sizes.len() {
            let step = w.offset_of(i + 1) - w.offset_of(i);
            prop_assert_eq!(Some(step), w.size_of(i), "index {}", i);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. No visible gaps
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn window_covers_viewport(
        raw in sizes(150),
        viewport in 1u32..800,
        overscan in 0usize..4,
        frac in 0.0f64..=1.0,
    ) {
        let sizes = as_f64(&raw);
        let viewport = viewport as f64;
        let mut w = dynamic_window(&sizes, viewport, Overscan::Items(overscan));
        let scroll = (w.max_scroll_offset() * frac).floor();
        w.set_scroll_offset(scroll);

        let r = w.window_range();
        prop_assert!(r.start_index <= r.end_index);
        prop_assert!(r.end_index < sizes.len());
        prop_assert_eq!(r.leading_offset, w.offset_of(r.start_index));
        for i in overlapping(&sizes, scroll, viewport) {
            prop_assert!(r.contains(i), "gap at {} for {:?} (scroll {})", i, r, scroll);
        }
    }

    #[test]
    fn extent_overscan_covers_viewport(
        raw in sizes(150),
        viewport in 1u32..800,
        margin in 0u32..300,
        frac in 0.0f64..=1.0,
    ) {
        let sizes = as_f64(&raw);
        let viewport = viewport as f64;
        let mut w = dynamic_window(&sizes, viewport, Overscan::Extent(margin as f64));
        let scroll = (w.max_scroll_offset() * frac).floor();
        w.set_scroll_offset(scroll);

        let r = w.window_range();
        for i in overlapping(&sizes, scroll, viewport) {
            prop_assert!(r.contains(i), "gap at {} for {:?}", i, r);
        }
    }

    #[test]
    fn fixed_window_covers_viewport(
        count in 1usize..5000,
        size in 1u32..100,
        viewport in 1u32..1000,
        overscan in 0usize..4,
        frac in 0.0f64..=1.0,
    ) {
        let size = size as f64;
        let mut w = ListWindow::new(
            WindowOptions::fixed(count, size)
                .with_viewport_length(viewport as f64)
                .with_overscan(Overscan::Items(overscan)),
        );
        let scroll = (w.max_scroll_offset() * frac).floor();
        w.set_scroll_offset(scroll);

        let r = w.window_range();
        let first = (scroll / size) as usize;
        let last = (((scroll + viewport as f64) / size).ceil() as usize).min(count) - 1;
        prop_assert!(r.start_index <= first);
        prop_assert!(r.end_index >= last.max(first).min(count - 1));
        prop_assert!(r.end_index < count);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Any scroll offset yields a valid window
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn any_scroll_offset_is_valid(raw in sizes(100), scroll in -1e6f64..1e9) {
        let sizes = as_f64(&raw);
        let mut w = dynamic_window(&sizes, 250.0, Overscan::default());
        w.set_scroll_offset(scroll);
        let r = w.window_range();
        prop_assert!(!r.is_empty());
        prop_assert!(r.start_index <= r.end_index);
        prop_assert!(r.end_index < sizes.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. scroll_to_index lands on the index
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_to_index_includes_target(
        raw in sizes(300),
        viewport in 1u32..600,
        pick in any::<prop::sample::Index>(),
        align in prop_oneof![
            Just(Align::Start),
            Just(Align::Center),
            Just(Align::End),
            Just(Align::Auto),
        ],
    ) {
        let sizes = as_f64(&raw);
        let estimates = sizes.clone();
        let items: Vec<usize> = (0..sizes.len()).collect();
        let mut list = WindowedList::new(
            WindowedListOptions::new(
                items,
                ItemSize::estimated(move |i, _: &usize| estimates[i]),
                |item: &usize, _| *item,
            )
            .with_viewport_length(viewport as f64)
            .with_overscan(Overscan::Items(0)),
        );
        let k = pick.index(sizes.len());
        list.scroll_to_index(k, align, ScrollBehavior::Instant, 0).unwrap();
        prop_assert!(list.window_range().contains(k));
        prop_assert!(list.render().contains(&k));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Replacing the collection clamps the window
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn replacement_clamps_to_new_end(old_len in 1usize..2000, new_len in 0usize..2000, frac in 0.0f64..=1.0) {
        let items: Vec<usize> = (0..old_len).collect();
        let mut list = WindowedList::new(
            WindowedListOptions::new(items, ItemSize::Fixed(20.0), |item: &usize, _| *item)
                .with_viewport_length(300.0),
        );
        let max = list.window().max_scroll_offset();
        list.scroll_to_offset(max * frac, 0);

        let r = list.set_items((0..new_len).collect::<Vec<usize>>());
        if new_len == 0 {
            prop_assert!(r.is_empty());
        } else {
            prop_assert!(r.end_index < new_len);
            prop_assert!(r.start_index <= r.end_index);
        }
        prop_assert!(list.render().iter().all(|&i| i < new_len));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. The coalescer never drops the final position
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn coalescer_applies_last_signal(
        signals in proptest::collection::vec((0u64..8, 0.0f64..10_000.0), 1..100),
        interval in 1u64..50,
    ) {
        let mut c = ScrollCoalescer::new(interval);
        let mut now = 0u64;
        let mut applied = Vec::new();
        for (gap, offset) in &signals {
            now += gap;
            if let Some(o) = c.push(*offset, now) {
                applied.push((now, o));
            }
        }
        if let Some(deadline) = c.deadline() {
            prop_assert!(deadline > now);
            prop_assert!(c.poll(deadline - 1).is_none());
            if let Some(o) = c.poll(deadline) {
                applied.push((deadline, o));
            }
        }

        let last = signals.last().map(|s| s.1);
        prop_assert_eq!(applied.last().map(|a| a.1), last);
        prop_assert!(c.pending().is_none());

        // At most one application per interval.
        for pair in applied.windows(2) {
            prop_assert!(pair[1].0 - pair[0].0 >= interval);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Fractional sizes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fractional_offsets_are_consistent(
        sizes in fractional_sizes(300),
        measured in proptest::collection::vec((0usize..300, 0.25f64..300.0), 0..50),
    ) {
        let mut w = dynamic_window(&sizes, 100.0, Overscan::default());
        let mut expected = sizes.clone();
        for (i, size) in measured {
            if i < sizes.len() {
                w.measure(i, size).unwrap();
                expected[i] = size;
            }
        }

        let len = sizes.len();
        prop_assert_eq!(w.offset_of(0), 0.0);
        prop_assert_eq!(w.offset_of(len), w.total_extent());
        let naive: f64 = expected.iter().sum();
        let tol = 1e-9 * naive;
        prop_assert!((w.total_extent() - naive).abs() <= tol);
        for (i, &size) in expected.iter().enumerate() {
            let step = w.offset_of(i + 1) - w.offset_of(i);
            prop_assert!((step - size).abs() <= tol, "index {}: {} vs {}", i, step, size);
        }
    }

    #[test]
    fn fractional_window_covers_viewport(
        sizes in fractional_sizes(150),
        viewport in 0.5f64..800.0,
        overscan in 0usize..3,
        frac in 0.0f64..=1.0,
        boundary in any::<prop::sample::Index>(),
        on_boundary in any::<bool>(),
    ) {
        let mut w = dynamic_window(&sizes, viewport, Overscan::Items(overscan));
        let max = w.max_scroll_offset();
        let scroll = if on_boundary {
            w.offset_of(boundary.index(sizes.len())).min(max)
        } else {
            max * frac
        };
        w.set_scroll_offset(scroll);

        let r = w.window_range();
        prop_assert!(r.start_index <= r.end_index);
        prop_assert!(r.end_index < sizes.len());
        prop_assert_eq!(r.leading_offset, w.offset_of(r.start_index));
        for i in 0..sizes.len() {
            if w.offset_of(i) < scroll + viewport && w.offset_of(i + 1) > scroll {
                prop_assert!(r.contains(i), "gap at {} for {:?} (scroll {})", i, r, scroll);
            }
        }
    }
}
