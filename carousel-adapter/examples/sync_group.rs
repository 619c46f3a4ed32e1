use carousel::{CarouselOptions, DataSource, Size};
use carousel_adapter::{Controller, SyncGroup};

fn controller(count: usize, width: f64) -> Controller<usize> {
    let mut c = Controller::new(CarouselOptions::new().with_circulating(true));
    c.carousel_mut()
        .set_data_source(Some(DataSource::fixed(count, Size::new(width, 60.0), |i| i)));
    c.on_host_size(Size::new(300.0, 80.0));
    c
}

fn main() {
    // Example: a thumbnail strip and a large pager that follow each other.
    let mut group = SyncGroup::new();
    let pager = group.push(controller(6, 280.0));
    let thumbs = group.push(controller(6, 60.0));
    group.link(pager, thumbs);
    group.link(thumbs, pager);

    if let Some(c) = group.get_mut(thumbs) {
        c.move_page(4, false, 0);
    }
    println!("delivered={}", group.dispatch());

    if let Some(c) = group.get_mut(pager) {
        c.move_page(2, true, 0);
    }
    for now_ms in (0..=320).step_by(80) {
        let delivered = group.tick(now_ms);
        println!("t={now_ms} delivered={delivered}");
    }

    for (peer, c) in group.iter() {
        println!("{peer:?}: page={:?}", c.carousel().current_display_index());
    }
}
