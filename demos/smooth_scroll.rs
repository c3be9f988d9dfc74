// A host loop driving a smooth scroll, interrupted by a second navigation.
use windowed_list::{Align, ItemSize, ScrollBehavior, WindowedList, WindowedListOptions};

fn main() {
    let items: Vec<u32> = (0..10_000).collect();
    let options = WindowedListOptions::new(items, ItemSize::Fixed(1.0), |item: &u32, _| *item)
        .with_viewport_length(20.0);
    let mut list = WindowedList::new(options);

    let mut now_ms = 0u64;
    let _ = list.scroll_to_index(2_000, Align::Center, ScrollBehavior::smooth(240), now_ms);

    let mut frame = 0u64;
    while list.is_animating() {
        // 60fps.
        now_ms = now_ms.saturating_add(16);
        frame += 1;

        let Some(range) = list.tick(now_ms) else {
            continue;
        };
        let rendered = list.render();

        if frame % 5 == 0 {
            println!(
                "t={now_ms}ms off={} range={range:?} first={:?} last={:?}",
                list.scroll_offset(),
                rendered.first(),
                rendered.last()
            );
        }

        // At ~120ms the host navigates elsewhere; the new animation starts from here.
        if (120..120 + 16).contains(&now_ms) {
            let _ = list.scroll_to_index(7_500, Align::Start, ScrollBehavior::smooth(300), now_ms);
        }
    }

    println!(
        "done: off={} range={:?}",
        list.scroll_offset(),
        list.window_range()
    );
}
