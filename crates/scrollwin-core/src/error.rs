use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListError {
    #[error("page size must be at least 1")]
    ZeroPageSize,

    #[error("row-block height must be at least 1")]
    ZeroRowBlockHeight,

    #[error("fixed seed must be finite, got {seed}")]
    NonFiniteSeed { seed: f64 },

    #[error(
        "{total} items in {total_pages} pages of height {row_block_height} overflow the window offset"
    )]
    OffsetOverflow {
        total: usize,
        total_pages: usize,
        row_block_height: u32,
    },
}
