#![forbid(unsafe_code)]

//! Double-buffer window over at most two adjacent pages.
//!
//! The rendering surface owns two row blocks stacked vertically ("above" and
//! "below"), each with one slot per item of a full page. [`WindowBuffer`]
//! decides which chunk each block shows and how far both blocks are
//! translated down, so the visible rows never jump when content is swapped.
//!
//! ```text
//!   offset ─┐
//!           ▼
//!   ┌─────────────┐
//!   │ above block │  previous page (or the first page)
//!   ├─────────────┤
//!   │ below block │  current page
//!   └─────────────┘
//! ```
//!
//! Invariants: `offset` is a multiple of the row-block height and never
//! negative. It grows by one block per forward swap once two pages are
//! loaded and shrinks by one block per backward swap down to zero.

use std::num::NonZeroU32;

use crate::cursor::Direction;
use crate::sequence::{DataChunk, Item};

/// One of the two row blocks of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Above,
    Below,
}

/// What the rendering surface should paint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderInstruction {
    pub above: DataChunk,
    pub below: DataChunk,
    /// Vertical translation applied to both blocks.
    pub offset: u32,
    slots_per_block: usize,
}

impl RenderInstruction {
    #[must_use]
    pub fn block(&self, block: Block) -> &DataChunk {
        match block {
            Block::Above => &self.above,
            Block::Below => &self.below,
        }
    }

    /// Number of item slots in each row block.
    #[must_use]
    pub fn slots_per_block(&self) -> usize {
        self.slots_per_block
    }

    /// Contents of every slot of `block`, in order.
    ///
    /// Yields exactly [`slots_per_block`](Self::slots_per_block) entries.
    /// `None` marks a slot the chunk does not cover; the surface must clear
    /// it rather than keep a stale value.
    pub fn slots(&self, block: Block) -> impl Iterator<Item = Option<Item>> + '_ {
        let chunk = self.block(block);
        (0..self.slots_per_block).map(move |idx| chunk.get(idx))
    }

    /// Page indices shown by the above and below blocks.
    #[must_use]
    pub fn visible_pages(&self) -> (Option<usize>, Option<usize>) {
        (self.above.page_index(), self.below.page_index())
    }
}

/// Current/previous chunks plus the accumulated offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub current: Option<DataChunk>,
    pub previous: Option<DataChunk>,
    pub offset: u32,
}

/// Converts fetched chunks into render instructions.
#[derive(Debug, Clone)]
pub struct WindowBuffer {
    view: ViewState,
    row_block_height: NonZeroU32,
    slots_per_block: usize,
}

impl WindowBuffer {
    #[must_use]
    pub fn new(row_block_height: NonZeroU32, slots_per_block: usize) -> Self {
        Self {
            view: ViewState::default(),
            row_block_height,
            slots_per_block,
        }
    }

    /// Drop both chunks and return the offset to zero.
    pub fn reset(&mut self) {
        self.view = ViewState::default();
    }

    /// Place a freshly fetched chunk.
    ///
    /// Returns `None` when nothing changes on screen, which only happens for
    /// a backward step while the offset is already zero.
    /// Whether [`apply`](Self::apply) would paint a chunk arriving from
    /// `direction`. Backward chunks are dropped while the offset is zero.
    #[must_use]
    pub fn accepts(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => true,
            Direction::Backward => {
                self.view.current.is_none()
                    || (self.view.offset > 0 && self.view.previous.is_some())
            }
        }
    }

    pub fn apply(&mut self, chunk: DataChunk, direction: Direction) -> Option<RenderInstruction> {
        let Some(current) = self.view.current.clone() else {
            // First paint: the chunk fills the above block, the below block
            // stays empty.
            self.view.current = Some(chunk.clone());
            self.view.previous = None;
            return Some(self.instruction(chunk, DataChunk::empty()));
        };

        match direction {
            Direction::Forward => {
                // The second page lands below the first without a shift.
                if self.view.previous.is_some() {
                    self.view.offset = self
                        .view
                        .offset
                        .saturating_add(self.row_block_height.get());
                }
                self.view.previous = Some(current.clone());
                self.view.current = Some(chunk.clone());
                Some(self.instruction(current, chunk))
            }
            Direction::Backward => {
                if self.view.offset == 0 {
                    return None;
                }
                let previous = self.view.previous.clone()?;
                self.view.offset = self
                    .view
                    .offset
                    .saturating_sub(self.row_block_height.get());
                self.view.current = Some(previous.clone());
                self.view.previous = Some(chunk.clone());
                Some(self.instruction(chunk, previous))
            }
        }
    }

    fn instruction(&self, above: DataChunk, below: DataChunk) -> RenderInstruction {
        RenderInstruction {
            above,
            below,
            offset: self.view.offset,
            slots_per_block: self.slots_per_block,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn offset(&self) -> u32 {
        self.view.offset
    }

    #[must_use]
    pub fn current(&self) -> Option<&DataChunk> {
        self.view.current.as_ref()
    }

    #[must_use]
    pub fn previous(&self) -> Option<&DataChunk> {
        self.view.previous.as_ref()
    }

    #[must_use]
    pub fn row_block_height(&self) -> NonZeroU32 {
        self.row_block_height
    }

    #[must_use]
    pub fn slots_per_block(&self) -> usize {
        self.slots_per_block
    }
}
