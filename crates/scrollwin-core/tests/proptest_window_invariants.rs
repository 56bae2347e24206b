//! Property-based invariant tests for the page cursor and window buffer.
//!
//! These tests verify structural invariants that must hold for any event
//! sequence:
//!
//! 1. 0 <= current_page <= total_pages.
//! 2. offset is a non-negative multiple of the row-block height.
//! 3. A painted step always fetches a page different from the previous fetch.
//! 4. Every fetched chunk has exactly the descriptor's size.
//! 5. The two visible pages are adjacent (below = above + 1).
//! 6. Determinism: the same events always produce the same paints.
//! 7. No panics for any total, page size and height.

use proptest::prelude::*;
use scrollwin_core::{
    Direction, InfiniteScrollList, ListConfig, PageCursor, RenderInstruction, RenderSurface,
    SeedPolicy, SequenceSource,
};
use std::num::NonZeroUsize;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Paints(Vec<RenderInstruction>);

impl RenderSurface for Paints {
    fn reset(&mut self) {
        self.0.clear();
    }

    fn paint(&mut self, instruction: &RenderInstruction) {
        self.0.push(instruction.clone());
    }
}

fn directions(max_len: usize) -> impl Strategy<Value = Vec<Direction>> {
    proptest::collection::vec(
        prop_oneof![Just(Direction::Forward), Just(Direction::Backward)],
        0..=max_len,
    )
}

fn build(total: usize, page_size: usize, height: u32) -> InfiniteScrollList<Paints> {
    let config = ListConfig::default()
        .with_page_size(page_size)
        .with_row_block_height(height)
        .with_seed(SeedPolicy::Fixed(0.377));
    let mut list = InfiniteScrollList::new(config, Paints::default()).expect("valid config");
    list.set_items_total(total).expect("total accepted");
    list
}

fn drive(list: &mut InfiniteScrollList<Paints>, direction: Direction) -> bool {
    match direction {
        Direction::Forward => list.on_bottom_reached(),
        Direction::Backward => list.on_top_reached(),
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Cursor stays in range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cursor_stays_in_range(
        total in 0usize..20_000,
        page_size in 1usize..3000,
        events in directions(60),
    ) {
        let mut cursor = PageCursor::new(NonZeroUsize::new(page_size).expect("nonzero"));
        cursor.set_total(total);
        for direction in events {
            let page = cursor.advance(direction);
            prop_assert!(cursor.current_page() <= cursor.total_pages());
            if let Some(page) = page {
                prop_assert!(page.index >= 1);
                prop_assert!(page.size >= 1 && page.size <= page_size);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Offset invariant
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offset_is_whole_blocks(
        total in 0usize..10_000,
        page_size in 1usize..500,
        height in 1u32..200,
        events in directions(80),
    ) {
        let mut list = build(total, page_size, height);
        for direction in events {
            drive(&mut list, direction);
            let offset = list.window().offset();
            prop_assert_eq!(offset % height, 0, "offset {} not a multiple of {}", offset, height);
            for paint in &list.surface().0 {
                prop_assert_eq!(paint.offset % height, 0);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-5. Fetch discipline and adjacency
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn painted_windows_are_adjacent_and_fresh(
        total in 1usize..8000,
        page_size in 1usize..400,
        events in directions(80),
    ) {
        let mut list = build(total, page_size, 10);
        let mut last_fetch = list.cursor().current_page();
        for direction in events {
            let painted = drive(&mut list, direction);
            let now = list.cursor().current_page();
            if painted {
                prop_assert_ne!(now, last_fetch);
                let instr = list.last_instruction().expect("painted instruction");
                let descriptor = list.cursor().state().descriptor().expect("on a page");
                let fetched = match direction {
                    Direction::Forward => &instr.below,
                    Direction::Backward => &instr.above,
                };
                prop_assert_eq!(fetched.len(), descriptor.size);
                prop_assert_eq!(fetched.page_index(), Some(descriptor.index));
                if let (Some(above), Some(below)) = instr.visible_pages() {
                    prop_assert_eq!(below, above + 1);
                }
            }
            last_fetch = now;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn same_events_same_paints(
        total in 0usize..6000,
        page_size in 1usize..700,
        events in directions(40),
    ) {
        let mut a = build(total, page_size, 7);
        let mut b = build(total, page_size, 7);
        for &direction in &events {
            prop_assert_eq!(drive(&mut a, direction), drive(&mut b, direction));
        }
        prop_assert_eq!(&a.surface().0, &b.surface().0);
    }

    #[test]
    fn source_is_pure(seed in -1.0e6f64..1.0e6, page in 1usize..10_000, len in 0usize..256) {
        let source = SequenceSource::new(seed);
        let first = source.produce(page, len);
        prop_assert_eq!(first.len(), len);
        prop_assert_eq!(&first, &source.produce(page, len));
        prop_assert!(first.iter().all(|item| item <= 9));
    }
}
