#![forbid(unsafe_code)]

//! The infinite-scroll coordinator.
//!
//! [`InfiniteScrollList`] owns one [`PageCursor`], one [`SequenceSource`] and
//! one [`WindowBuffer`], and is driven by the host on three events: bottom
//! edge reached, top edge reached, and a new total item count. Every event is
//! processed to completion before the call returns; the host serializes calls.
//!
//! ```text
//! edge event ─► PageCursor ─► PageDescriptor ─► SequenceSource ─► DataChunk
//!                                                                   │
//!           RenderSurface ◄── RenderInstruction ◄── WindowBuffer ◄──┘
//! ```

use std::num::{NonZeroU32, NonZeroUsize};

use crate::config::ListConfig;
use crate::cursor::{Direction, PageCursor};
use crate::error::{ListError, Result};
use crate::sequence::SequenceSource;
use crate::window::{RenderInstruction, WindowBuffer};

/// The host-side surface that paints render instructions.
///
/// The surface owns its row slots; the core only ever hands it data.
pub trait RenderSurface {
    /// Clear everything. Called on every new total, before the first paint of
    /// the new sequence.
    fn reset(&mut self);

    /// Paint both row blocks and apply the offset.
    fn paint(&mut self, instruction: &RenderInstruction);
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn paint(&mut self, instruction: &RenderInstruction) {
        (**self).paint(instruction);
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn paint(&mut self, instruction: &RenderInstruction) {
        (**self).paint(instruction);
    }
}

/// A surface that paints nothing. Useful for headless traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn reset(&mut self) {}

    fn paint(&mut self, _instruction: &RenderInstruction) {}
}

/// Bidirectional infinite-scroll list over a fixed-height viewport.
#[derive(Debug)]
pub struct InfiniteScrollList<S> {
    config: ListConfig,
    page_size: NonZeroUsize,
    row_block_height: NonZeroU32,
    cursor: PageCursor,
    source: SequenceSource,
    window: WindowBuffer,
    surface: S,
    last_instruction: Option<RenderInstruction>,
    generation: u64,
}

impl<S: RenderSurface> InfiniteScrollList<S> {
    /// Build an empty list. Call [`set_items_total`](Self::set_items_total)
    /// to populate it.
    pub fn new(config: ListConfig, surface: S) -> Result<Self> {
        let (page_size, row_block_height) = config.validate()?;
        let source = config.seed.source();
        Ok(Self {
            page_size,
            row_block_height,
            cursor: PageCursor::new(page_size),
            source,
            window: WindowBuffer::new(row_block_height, page_size.get()),
            surface,
            last_instruction: None,
            generation: 0,
            config,
        })
    }

    /// Replace the whole sequence with `total` items.
    ///
    /// Cursor and window state are rebuilt from scratch, the surface is reset,
    /// and the first page is painted. A total whose offsets cannot be
    /// represented is rejected and the current state is kept.
    pub fn set_items_total(&mut self, total: usize) -> Result<()> {
        let total_pages = total.div_ceil(self.page_size.get());
        let height = self.row_block_height.get();
        let fits = u64::try_from(total_pages)
            .ok()
            .and_then(|pages| pages.checked_mul(u64::from(height)))
            .is_some_and(|extent| extent <= u64::from(u32::MAX));
        if !fits {
            return Err(ListError::OffsetOverflow {
                total,
                total_pages,
                row_block_height: height,
            });
        }

        self.generation += 1;
        self.source = self.config.seed.source();
        self.cursor = PageCursor::new(self.page_size);
        self.cursor.set_total(total);
        self.window = WindowBuffer::new(self.row_block_height, self.page_size.get());
        self.last_instruction = None;
        self.surface.reset();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: crate::logging::TARGET,
            message = "scrollwin.set_total",
            total,
            page_size = self.page_size.get(),
            total_pages,
            generation = self.generation
        );

        if total > 0 {
            self.step(Direction::Forward);
        }
        Ok(())
    }

    /// The bottom sentinel became visible. Returns whether anything was painted.
    pub fn on_bottom_reached(&mut self) -> bool {
        self.step(Direction::Forward)
    }

    /// The top sentinel became visible. Returns whether anything was painted.
    pub fn on_top_reached(&mut self) -> bool {
        self.step(Direction::Backward)
    }

    /// Route one edge event through cursor, source and window.
    fn step(&mut self, direction: Direction) -> bool {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            target: crate::logging::TARGET,
            "scrollwin.advance",
            direction = direction.as_str(),
            page = tracing::field::Empty,
            size = tracing::field::Empty,
            painted = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _guard = span.enter();

        let Some(page) = self.cursor.advance(direction) else {
            #[cfg(feature = "tracing")]
            {
                span.record("painted", false);
                tracing::debug!(
                    target: crate::logging::TARGET,
                    message = "scrollwin.clamped",
                    current_page = self.cursor.current_page(),
                    total_pages = self.cursor.total_pages()
                );
            }
            return false;
        };

        #[cfg(feature = "tracing")]
        {
            span.record("page", page.index);
            span.record("size", page.size);
        }

        // The cursor has already moved; only the page generation is skipped.
        if !self.window.accepts(direction) {
            #[cfg(feature = "tracing")]
            span.record("painted", false);
            return false;
        }

        let chunk = self.source.produce(page.index, page.size);
        let Some(instruction) = self.window.apply(chunk, direction) else {
            #[cfg(feature = "tracing")]
            span.record("painted", false);
            return false;
        };

        #[cfg(feature = "tracing")]
        {
            let (above_page, below_page) = instruction.visible_pages();
            span.record("painted", true);
            tracing::debug!(
                target: crate::logging::TARGET,
                message = "scrollwin.window",
                offset = instruction.offset,
                above_page,
                below_page
            );
        }

        self.surface.paint(&instruction);
        self.last_instruction = Some(instruction);
        true
    }

    /// Paint the most recent instruction again, e.g. after the surface was
    /// rebuilt. Returns `false` when nothing has been painted yet.
    pub fn repaint(&mut self) -> bool {
        match &self.last_instruction {
            Some(instruction) => {
                self.surface.paint(instruction);
                true
            }
            None => false,
        }
    }
}

impl<S> InfiniteScrollList<S> {
    #[must_use]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    #[must_use]
    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    #[must_use]
    pub fn window(&self) -> &WindowBuffer {
        &self.window
    }

    #[must_use]
    pub fn source(&self) -> &SequenceSource {
        &self.source
    }

    #[must_use]
    pub fn last_instruction(&self) -> Option<&RenderInstruction> {
        self.last_instruction.as_ref()
    }

    /// Number of `set_items_total` calls that took effect.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
