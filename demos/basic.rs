use windowed_list::{Align, ItemSize, ScrollBehavior, WindowedList, WindowedListOptions};

fn main() {
    let items: Vec<String> = (0..1_000_000).map(|i| format!("row {i}")).collect();
    let options = WindowedListOptions::new(items, ItemSize::Fixed(20.0), |item: &String, _| {
        item.clone()
    })
    .with_viewport_length(200.0)
    .with_on_end_reached(Some(|| println!("end reached")));
    let mut list = WindowedList::new(options);

    list.on_scroll(123_456.0, 0);
    println!("total_extent={}", list.total_extent());
    println!("window_range={:?}", list.window_range());
    println!("first_rendered={:?}", list.render().first());

    let to = list
        .scroll_to_index(999_999, Align::End, ScrollBehavior::Instant, 16)
        .unwrap_or_default();
    println!("after scroll_to_index: offset={to} range={:?}", list.window_range());
}
