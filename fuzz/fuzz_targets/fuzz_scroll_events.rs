#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scrollwin_core::{Block, InfiniteScrollList, ListConfig, NullSurface, SeedPolicy};

#[derive(Debug, Arbitrary)]
enum Event {
    Bottom,
    Top,
    Total(u16),
}

#[derive(Debug, Arbitrary)]
struct Input {
    page_size: u8,
    row_block_height: u8,
    seed: u16,
    events: Vec<Event>,
}

fuzz_target!(|input: Input| {
    let page_size = usize::from(input.page_size).max(1);
    let height = u32::from(input.row_block_height).max(1);
    let config = ListConfig::default()
        .with_page_size(page_size)
        .with_row_block_height(height)
        .with_seed(SeedPolicy::Fixed(f64::from(input.seed) / 7.0));
    let Ok(mut list) = InfiniteScrollList::new(config, NullSurface) else {
        return;
    };

    // Cap event count to keep fuzzing fast.
    for event in input.events.iter().take(512) {
        let painted = match event {
            Event::Bottom => list.on_bottom_reached(),
            Event::Top => list.on_top_reached(),
            Event::Total(total) => list.set_items_total(usize::from(*total)).is_ok(),
        };

        // Post-conditions that must always hold:
        let cursor = list.cursor();
        assert!(cursor.current_page() <= cursor.total_pages(), "cursor past end");
        let offset = list.window().offset();
        assert_eq!(offset % height, 0, "offset not in whole blocks");

        if painted {
            if let Some(instr) = list.last_instruction() {
                assert_eq!(instr.slots(Block::Above).count(), page_size);
                assert_eq!(instr.slots(Block::Below).count(), page_size);
                assert!(instr.above.len() <= page_size && instr.below.len() <= page_size);
                if let (Some(above), Some(below)) = instr.visible_pages() {
                    assert_eq!(below, above + 1, "window pages not adjacent");
                }
            }
        }
    }
});
