// Measured sizes replace estimates, and `resize_item` keeps the visible content in place.
use windowed_list::{Align, ItemSize, ScrollBehavior, WindowedList, WindowedListOptions};

fn main() {
    let items: Vec<usize> = (0..100).collect();
    let options = WindowedListOptions::new(
        items,
        ItemSize::estimated(|_, _: &usize| 10.0),
        |item: &usize, index| (*item, index),
    )
    .with_viewport_length(30.0)
    .with_initial_offset(200.0);
    let mut list = WindowedList::new(options);

    println!(
        "before: off={} total={} range={:?}",
        list.scroll_offset(),
        list.total_extent(),
        list.window_range()
    );

    // An item above the viewport grew: shift the scroll offset by the same amount.
    let shift = list.resize_item(0, 30.0).unwrap_or_default();
    println!(
        "resize_item(0): shift={shift} off={} total={}",
        list.scroll_offset(),
        list.total_extent()
    );

    // A plain measurement leaves the scroll offset alone.
    if let Err(err) = list.report_measured_size(1, 50.0) {
        eprintln!("{err}");
    }
    println!(
        "report_measured_size(1): off={} total={}",
        list.scroll_offset(),
        list.total_extent()
    );

    let accepted = list.report_measured_sizes([(2, 30.0), (3, f64::NAN), (4, 12.0)]);
    println!("report_measured_sizes: accepted={accepted}");

    // Navigation uses the updated offsets.
    let to = list
        .scroll_to_index(10, Align::Start, ScrollBehavior::Instant, 0)
        .unwrap_or_default();
    println!("scroll_to_index(10): off={to} range={:?}", list.window_range());
}
