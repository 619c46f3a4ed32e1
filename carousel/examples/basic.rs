// Example: circulating layout, a drag that settles in the padding, and a programmatic move.
use carousel::{Carousel, CarouselOptions, DataSource, Delegate, Size};

fn main() {
    let ds = DataSource::fixed(5, Size::new(100.0, 80.0), |i| format!("card {i}"))
        .with_item_spacing(10.0);
    let mut c = Carousel::new(CarouselOptions::new().with_circulating(true).with_auto_align(true))
        .with_data_source(ds)
        .with_delegate(Delegate::default().with_did_change_index(|i| println!("page -> {i}")))
        .with_host_size(Size::new(300.0, 120.0));

    if !c.layout() {
        return;
    }
    let Some(g) = c.geometry().copied() else {
        return;
    };
    println!(
        "real_count={} content_width={} offset={}",
        g.real_count,
        g.content_extent.width,
        c.offset()
    );

    c.bind_visible_views();
    c.views().for_each(|real, view| println!("  slot {real}: {view}"));

    // Fling left far enough to land in the leading padding.
    c.begin_drag();
    c.drag_to(60.0);
    let target = c.target_content_offset(30.0, -1.5);
    c.end_drag();
    if let Some(settled) = c.settle(target) {
        println!(
            "settled real={} display={} rehomed={} apply offset={}",
            settled.real_index, settled.display_index, settled.rehomed, settled.offset
        );
    }

    if let Some(to) = c.move_page(3, true) {
        println!("scroll to {} (real {})", to.offset, to.real_index);
        c.finish_programmatic_move();
    }
    println!("state={:?}", c.scroll_state());
}
