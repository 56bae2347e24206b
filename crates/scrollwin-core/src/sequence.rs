#![forbid(unsafe_code)]

//! Deterministic paged data source.
//!
//! [`SequenceSource`] stands in for any paged backend: given a page index and
//! a length it produces the same [`DataChunk`] every time, so a page that
//! scrolls out of the window can be dropped and regenerated on the way back
//! instead of being stored.
//!
//! # Generator
//!
//! Each call derives a working seed `seed + page_index` and iterates the map
//!
//! ```text
//! s' = sin(s) * 10000
//! item = floor(frac(s') * 10)
//! ```
//!
//! `length` times. The generator state lives only for the duration of one
//! call; there is no cross-call mutable state.

use std::fmt;
use std::sync::Arc;

use web_time::{SystemTime, UNIX_EPOCH};

/// A single list item: one decimal digit in `0..=9`.
pub type Item = u8;

/// The materialized item sequence for one page.
///
/// Cloning is cheap; the items are shared and never mutated after
/// production.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct DataChunk {
    /// 1-based page index that produced this chunk. `0` for the empty chunk.
    page_index: usize,
    items: Arc<[Item]>,
}

impl DataChunk {
    /// A chunk with no items and no page.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap already-produced items.
    #[must_use]
    pub fn new(page_index: usize, items: impl Into<Arc<[Item]>>) -> Self {
        Self {
            page_index,
            items: items.into(),
        }
    }

    /// Page index that produced this chunk, or `None` for the empty chunk.
    #[must_use]
    pub fn page_index(&self) -> Option<usize> {
        (self.page_index > 0).then_some(self.page_index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Item> {
        self.items.get(idx).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        self.items.iter().copied()
    }
}

impl fmt::Debug for DataChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pages run to thousands of items; keep debug output readable.
        const PREVIEW: usize = 8;
        let head = &self.items[..self.items.len().min(PREVIEW)];
        f.debug_struct("DataChunk")
            .field("page_index", &self.page_index)
            .field("len", &self.items.len())
            .field("head", &head)
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DataChunk {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("DataChunk", 2)?;
        state.serialize_field("page", &self.page_index())?;
        state.serialize_field("items", &*self.items)?;
        state.end()
    }
}

/// Iterator over the chaotic map, seeded once per [`SequenceSource::produce`].
#[derive(Debug, Clone, Copy)]
struct ChaoticMap {
    state: f64,
}

impl ChaoticMap {
    fn new(seed: f64) -> Self {
        Self { state: seed }
    }
}

impl Iterator for ChaoticMap {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        self.state = self.state.sin() * 10_000.0;
        let frac = self.state - self.state.floor();
        // frac is in [0, 1); the clamp only guards against NaN-adjacent input.
        Some(((frac * 10.0).floor() as Item).min(9))
    }
}

/// Pure, seed-keyed page generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceSource {
    seed: f64,
}

impl SequenceSource {
    #[must_use]
    pub fn new(seed: f64) -> Self {
        Self { seed }
    }

    /// A source seeded from [`entropy_seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    #[must_use]
    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Produce `length` items for `page_index`.
    ///
    /// Same `(seed, page_index, length)` always yields the same chunk, and a
    /// shorter `length` yields a prefix of a longer one. `length == 0` yields
    /// an empty chunk tagged with the page.
    #[must_use]
    pub fn produce(&self, page_index: usize, length: usize) -> DataChunk {
        let items: Vec<Item> = ChaoticMap::new(self.seed + page_index as f64)
            .take(length)
            .collect();
        DataChunk::new(page_index, items)
    }
}

/// A seed in `[0, 1)` derived from the wall clock.
///
/// Used to re-randomize list contents on every new total; not suitable for
/// anything security-related.
#[must_use]
pub fn entropy_seed() -> f64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    // SplitMix64 finalizer to spread low-entropy clock bits.
    let mut z = nanos.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}
