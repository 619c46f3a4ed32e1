use carousel::{CarouselOptions, DataSource, Size};
use carousel_adapter::{Controller, Easing};

fn main() {
    // Example: a controller advancing pages from a simulated 60fps clock.
    //
    // An adapter would:
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned offset to the real scroll surface (if any)
    // - render the visible slots of the carousel
    let ds = DataSource::fixed(4, Size::new(120.0, 90.0), |i| i);
    let mut c = Controller::new(
        CarouselOptions::new()
            .with_circulating(true)
            .with_magnify_center(true, 1.2)
            .with_auto_slide_interval(0.5),
    )
    .with_animation(240, Easing::EaseInOutCubic);
    c.carousel_mut().set_data_source(Some(ds));
    if !c.on_host_size(Size::new(320.0, 120.0)) {
        return;
    }

    let mut now_ms = 0u64;
    while now_ms < 3_000 {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if !c.is_animating() {
                println!(
                    "t={now_ms} off={off} page={:?} magnified={:?}",
                    c.carousel().current_display_index(),
                    c.carousel().magnified_index()
                );
            }
        }
    }
}
