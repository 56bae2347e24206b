//! Slot-based rendering surface.
//!
//! Models the host markup: two row blocks, each with a fixed number of item
//! slots created once up front, translated vertically by the window offset.
//! A slot is either showing an item or hidden; every paint rewrites every
//! slot so no stale value survives a short last page.

use scrollwin_core::{Block, Item, RenderInstruction, RenderSurface};
use serde::Serialize;

/// Glyph used for hidden slots in text previews.
const HIDDEN_GLYPH: char = '·';

#[derive(Debug, Clone)]
pub struct SlotSurface {
    above: Vec<Option<Item>>,
    below: Vec<Option<Item>>,
    offset: u32,
    above_page: Option<usize>,
    below_page: Option<usize>,
    paints: usize,
    resets: usize,
}

/// Serializable view of the surface after a paint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceSnapshot {
    pub offset: u32,
    pub above_page: Option<usize>,
    pub below_page: Option<usize>,
    pub above_visible: usize,
    pub below_visible: usize,
    pub above_preview: String,
    pub below_preview: String,
}

impl SlotSurface {
    /// A surface with `slots_per_block` hidden slots in each block.
    #[must_use]
    pub fn new(slots_per_block: usize) -> Self {
        Self {
            above: vec![None; slots_per_block],
            below: vec![None; slots_per_block],
            offset: 0,
            above_page: None,
            below_page: None,
            paints: 0,
            resets: 0,
        }
    }

    fn slots(&self, block: Block) -> &[Option<Item>] {
        match block {
            Block::Above => &self.above,
            Block::Below => &self.below,
        }
    }

    fn slots_mut(&mut self, block: Block) -> &mut [Option<Item>] {
        match block {
            Block::Above => &mut self.above,
            Block::Below => &mut self.below,
        }
    }

    /// Number of slots currently showing an item.
    #[must_use]
    pub fn visible_count(&self, block: Block) -> usize {
        self.slots(block).iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn slot(&self, block: Block, idx: usize) -> Option<Item> {
        self.slots(block).get(idx).copied().flatten()
    }

    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    pub fn paints(&self) -> usize {
        self.paints
    }

    #[must_use]
    pub fn resets(&self) -> usize {
        self.resets
    }

    /// First `len` slots of `block` as digits, hidden slots as `·`.
    #[must_use]
    pub fn preview(&self, block: Block, len: usize) -> String {
        self.slots(block)
            .iter()
            .take(len)
            .map(|slot| match slot {
                Some(item) => char::from(b'0' + item),
                None => HIDDEN_GLYPH,
            })
            .collect()
    }

    #[must_use]
    pub fn snapshot(&self, preview_len: usize) -> SurfaceSnapshot {
        SurfaceSnapshot {
            offset: self.offset,
            above_page: self.above_page,
            below_page: self.below_page,
            above_visible: self.visible_count(Block::Above),
            below_visible: self.visible_count(Block::Below),
            above_preview: self.preview(Block::Above, preview_len),
            below_preview: self.preview(Block::Below, preview_len),
        }
    }
}

impl RenderSurface for SlotSurface {
    fn reset(&mut self) {
        self.above.fill(None);
        self.below.fill(None);
        self.offset = 0;
        self.above_page = None;
        self.below_page = None;
        self.resets += 1;
    }

    fn paint(&mut self, instruction: &RenderInstruction) {
        for block in [Block::Above, Block::Below] {
            let slots = self.slots_mut(block);
            for (slot, value) in slots.iter_mut().zip(instruction.slots(block)) {
                *slot = value;
            }
        }
        (self.above_page, self.below_page) = instruction.visible_pages();
        self.offset = instruction.offset;
        self.paints += 1;
    }
}
