//! List configuration.

use std::num::{NonZeroU32, NonZeroUsize};

use crate::error::{ListError, Result};
use crate::sequence::{SequenceSource, entropy_seed};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 1000;
/// Default rendered height of one page worth of rows (one unit per item).
pub const DEFAULT_ROW_BLOCK_HEIGHT: u32 = 1000;

/// How the sequence source is seeded on each new total.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SeedPolicy {
    /// Same seed for every generation.
    Fixed(f64),
    /// Fresh wall-clock seed for every generation.
    #[default]
    Entropy,
}

impl SeedPolicy {
    /// Source for the next list generation.
    #[must_use]
    pub fn source(&self) -> SequenceSource {
        match *self {
            Self::Fixed(seed) => SequenceSource::new(seed),
            Self::Entropy => SequenceSource::new(entropy_seed()),
        }
    }
}

/// Configuration for an [`InfiniteScrollList`](crate::list::InfiniteScrollList).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListConfig {
    /// Items per page. Also the slot count of each row block.
    pub page_size: usize,
    /// Rendered height of one row block; the unit of the window offset.
    pub row_block_height: u32,
    pub seed: SeedPolicy,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            row_block_height: DEFAULT_ROW_BLOCK_HEIGHT,
            seed: SeedPolicy::default(),
        }
    }
}

impl ListConfig {
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_row_block_height(mut self, height: u32) -> Self {
        self.row_block_height = height;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    /// Check every field, returning the non-zero forms the core works with.
    pub fn validate(&self) -> Result<(NonZeroUsize, NonZeroU32)> {
        let page_size = NonZeroUsize::new(self.page_size).ok_or(ListError::ZeroPageSize)?;
        let height =
            NonZeroU32::new(self.row_block_height).ok_or(ListError::ZeroRowBlockHeight)?;
        match self.seed {
            SeedPolicy::Fixed(seed) if !seed.is_finite() => {
                return Err(ListError::NonFiniteSeed { seed });
            }
            _ => {}
        }
        Ok((page_size, height))
    }
}
