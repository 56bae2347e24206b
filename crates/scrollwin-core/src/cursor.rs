#![forbid(unsafe_code)]

//! Page cursor: turns edge-reached events into page fetch requests.
//!
//! The window always holds two adjacent pages. When scroll direction reverses,
//! the page immediately in the new direction is already on screen, so a naive
//! single step would request a page that is already rendered. The cursor skips
//! past it with an extra step, except at the two sequence boundaries where the
//! step is clamped instead.
//!
//! # State Machine
//!
//! ```text
//!            set_total(0)
//!   ┌──────────────────────────── Empty ◄───────────────┐
//!   │                                                   │
//!   │ set_total(n > 0)                                  │ set_total(0)
//!   ▼                                                   │
//! AtStart ──forward──► Mid ──forward──► AtEnd ──────────┘
//!    ▲                  │ ▲                │
//!    └────backward──────┘ └───backward─────┘
//! ```
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | `total == 0` | every advance is a no-op |
//! | forward at `total_pages` | no-op |
//! | backward at page `<= 1` | no-op |
//! | forward after backward with `total_pages == 2` | no-op |

use std::fmt;
use std::num::NonZeroUsize;

/// Scroll direction of an edge event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Toward higher page indices (bottom edge reached).
    Forward,
    /// Toward lower page indices (top edge reached).
    Backward,
}

impl Direction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fetch request: which page, and how many items it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PageDescriptor {
    /// 1-based page index.
    pub index: usize,
    /// Item count; smaller than the page size only for the last page.
    pub size: usize,
}

/// Coarse classification of a [`CursorState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CursorPhase {
    /// No items at all.
    Empty,
    /// Before the first page or on page 1.
    AtStart,
    /// Strictly between the first and the last page.
    Mid,
    /// On the last page. Takes precedence over `AtStart` for single-page totals.
    AtEnd,
}

/// Snapshot of the cursor fields.
///
/// Invariant: `current_page <= total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CursorState {
    pub total: usize,
    pub page_size: NonZeroUsize,
    pub total_pages: usize,
    pub current_page: usize,
    pub last_direction: Option<Direction>,
}

impl CursorState {
    /// Fresh state for `total` items, positioned before the first page.
    #[must_use]
    pub fn new(total: usize, page_size: NonZeroUsize) -> Self {
        Self {
            total,
            page_size,
            total_pages: total.div_ceil(page_size.get()),
            current_page: 0,
            last_direction: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> CursorPhase {
        if self.total == 0 {
            CursorPhase::Empty
        } else if self.current_page == self.total_pages {
            CursorPhase::AtEnd
        } else if self.current_page <= 1 {
            CursorPhase::AtStart
        } else {
            CursorPhase::Mid
        }
    }

    /// Item count of page `index` (1-based). Zero outside `1..=total_pages`.
    #[must_use]
    pub fn page_size_of(&self, index: usize) -> usize {
        if index == 0 || index > self.total_pages {
            0
        } else if index < self.total_pages {
            self.page_size.get()
        } else {
            self.total - (self.total_pages - 1) * self.page_size.get()
        }
    }

    /// The single transition function.
    ///
    /// Returns the state after one step in `direction`, or `None` when the
    /// step is clamped. A reversal skips the page the window already holds.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        if self.total == 0 {
            return None;
        }
        let mut page = self.current_page;
        match direction {
            Direction::Forward => {
                if page >= self.total_pages {
                    return None;
                }
                if self.last_direction == Some(Direction::Backward) {
                    if self.total_pages == 2 {
                        return None;
                    }
                    page += 1;
                }
                page += 1;
                if page > self.total_pages {
                    return None;
                }
            }
            Direction::Backward => {
                if page <= 1 {
                    return None;
                }
                // Landing on page 1 via the extra step is clamped.
                if self.last_direction == Some(Direction::Forward) && page != 2 {
                    page -= 1;
                }
                page -= 1;
            }
        }
        Some(Self {
            current_page: page,
            last_direction: Some(direction),
            ..self
        })
    }

    /// Descriptor for the current page, if the cursor is on one.
    #[must_use]
    pub fn descriptor(&self) -> Option<PageDescriptor> {
        (self.current_page > 0).then(|| PageDescriptor {
            index: self.current_page,
            size: self.page_size_of(self.current_page),
        })
    }
}

/// Tracks the total, page size and current page of one list generation.
#[derive(Debug, Clone)]
pub struct PageCursor {
    state: CursorState,
}

impl PageCursor {
    /// An empty cursor (`total == 0`).
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            state: CursorState::new(0, page_size),
        }
    }

    /// Reset for a new total.
    ///
    /// The caller must follow up with [`advance_forward`](Self::advance_forward)
    /// to populate the first page.
    pub fn set_total(&mut self, total: usize) {
        self.state = CursorState::new(total, self.state.page_size);
    }

    /// Step toward the end of the list.
    pub fn advance_forward(&mut self) -> Option<PageDescriptor> {
        self.advance(Direction::Forward)
    }

    /// Step toward the start of the list.
    pub fn advance_backward(&mut self) -> Option<PageDescriptor> {
        self.advance(Direction::Backward)
    }

    /// Step in `direction`, returning the page to fetch.
    ///
    /// A clamped step leaves the cursor untouched.
    pub fn advance(&mut self, direction: Direction) -> Option<PageDescriptor> {
        let next = self.state.step(direction)?;
        self.state = next;
        next.descriptor()
    }

    #[must_use]
    pub fn state(&self) -> CursorState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> CursorPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.state.total
    }

    #[must_use]
    pub fn page_size(&self) -> NonZeroUsize {
        self.state.page_size
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.state.total_pages
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    #[must_use]
    pub fn last_direction(&self) -> Option<Direction> {
        self.state.last_direction
    }

    #[must_use]
    pub fn page_size_of(&self, index: usize) -> usize {
        self.state.page_size_of(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(total: usize, page_size: usize) -> PageCursor {
        let mut cursor = PageCursor::new(NonZeroUsize::new(page_size).expect("nonzero page size"));
        cursor.set_total(total);
        cursor
    }

    fn page(index: usize, size: usize) -> Option<PageDescriptor> {
        Some(PageDescriptor { index, size })
    }

    #[test]
    fn empty_cursor_never_advances() {
        let mut c = cursor(0, 1000);
        assert_eq!(c.phase(), CursorPhase::Empty);
        assert_eq!(c.advance_forward(), None);
        assert_eq!(c.advance_backward(), None);
        assert_eq!(c.current_page(), 0);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(cursor(2500, 1000).total_pages(), 3);
        assert_eq!(cursor(2000, 1000).total_pages(), 2);
        assert_eq!(cursor(1, 1000).total_pages(), 1);
    }

    #[test]
    fn last_page_gets_remainder() {
        let c = cursor(3500, 1000);
        assert_eq!(c.page_size_of(3), 1000);
        assert_eq!(c.page_size_of(4), 500);
        assert_eq!(c.page_size_of(5), 0);
        assert_eq!(c.page_size_of(0), 0);
        // Exact multiple: last page is full.
        assert_eq!(cursor(2000, 1000).page_size_of(2), 1000);
    }

    #[test]
    fn single_item_total() {
        let mut c = cursor(1, 1000);
        assert_eq!(c.advance_forward(), page(1, 1));
        assert_eq!(c.phase(), CursorPhase::AtEnd);
        assert_eq!(c.advance_forward(), None);
        assert_eq!(c.advance_backward(), None);
    }

    #[test]
    fn forward_then_reverse_skips_buffered_page() {
        let mut c = cursor(2500, 1000);
        assert_eq!(c.advance_forward(), page(1, 1000));
        assert_eq!(c.advance_forward(), page(2, 1000));
        assert_eq!(c.advance_forward(), page(3, 500));
        assert_eq!(c.advance_forward(), None);
        // Page 2 is still in the window; go straight to page 1.
        assert_eq!(c.advance_backward(), page(1, 1000));
        assert_eq!(c.advance_backward(), None);
        // Page 2 is in the window again; go straight to page 3.
        assert_eq!(c.advance_forward(), page(3, 500));
    }

    #[test]
    fn two_pages_clamp_both_ways() {
        let mut c = cursor(2000, 1000);
        assert_eq!(c.advance_forward(), page(1, 1000));
        assert_eq!(c.advance_forward(), page(2, 1000));
        assert_eq!(c.advance_forward(), None);
        assert_eq!(c.advance_backward(), page(1, 1000));
        assert_eq!(c.advance_backward(), None);
        assert_eq!(c.advance_forward(), None);
    }

    #[test]
    fn backward_from_page_two_is_clamped_to_page_one() {
        let mut c = cursor(4000, 1000);
        c.advance_forward();
        c.advance_forward();
        assert_eq!(c.advance_backward(), page(1, 1000));
        assert_eq!(c.last_direction(), Some(Direction::Backward));
    }

    #[test]
    fn consecutive_backward_steps_are_single() {
        let mut c = cursor(5000, 1000);
        for _ in 0..5 {
            c.advance_forward();
        }
        assert_eq!(c.advance_backward(), page(3, 1000));
        assert_eq!(c.advance_backward(), page(2, 1000));
        assert_eq!(c.advance_backward(), page(1, 1000));
        assert_eq!(c.advance_backward(), None);
    }

    #[test]
    fn clamped_step_leaves_state_untouched() {
        let mut c = cursor(2000, 1000);
        c.advance_forward();
        c.advance_forward();
        let before = c.state();
        assert_eq!(c.advance_forward(), None);
        assert_eq!(c.state(), before);
    }

    #[test]
    fn set_total_resets_everything() {
        let mut c = cursor(3000, 1000);
        c.advance_forward();
        c.advance_forward();
        c.set_total(10);
        assert_eq!(c.current_page(), 0);
        assert_eq!(c.last_direction(), None);
        assert_eq!(c.total_pages(), 1);
        assert_eq!(c.advance_forward(), page(1, 10));
    }

    #[test]
    fn phase_tracks_position() {
        let mut c = cursor(3000, 1000);
        assert_eq!(c.phase(), CursorPhase::AtStart);
        c.advance_forward();
        assert_eq!(c.phase(), CursorPhase::AtStart);
        c.advance_forward();
        assert_eq!(c.phase(), CursorPhase::Mid);
        c.advance_forward();
        assert_eq!(c.phase(), CursorPhase::AtEnd);
    }

    #[test]
    fn step_is_pure() {
        let state = CursorState::new(3000, NonZeroUsize::new(1000).expect("nonzero"));
        let next = state.step(Direction::Forward).expect("first page");
        assert_eq!(state.current_page, 0);
        assert_eq!(next.current_page, 1);
        assert_eq!(next.descriptor(), page(1, 1000));
    }

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Direction::Backward.to_string(), "backward");
    }
}
