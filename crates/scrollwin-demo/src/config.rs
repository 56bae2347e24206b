//! Demo configuration: optional JSON file, then command-line overrides.

use std::fs;
use std::path::Path;

use clap::Args;
use scrollwin_core::{ListConfig, SeedPolicy};
use serde::{Deserialize, Serialize};

use crate::error::{DemoError, Result};

/// Default number of leading slots shown per block in text output.
pub const DEFAULT_PREVIEW: usize = 16;

/// Largest page size the demo surface will allocate slots for.
pub const MAX_PAGE_SIZE: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub list: ListConfig,
    /// Leading slots per block printed in text output.
    pub preview: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            list: ListConfig::default(),
            preview: DEFAULT_PREVIEW,
        }
    }
}

/// Flags shared by every command that builds a list.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Items per page.
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Rendered height of one page of rows.
    #[arg(long)]
    pub row_height: Option<u32>,

    /// Fixed data seed; omit for a fresh seed per total.
    #[arg(long)]
    pub seed: Option<f64>,

    /// Leading slots per block shown in text output.
    #[arg(long)]
    pub preview: Option<usize>,
}

impl DemoConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DemoError::MissingConfig {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the file named by `args` (if any) and apply the flag overrides.
    pub fn resolve(args: &ListArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(page_size) = args.page_size {
            config.list.page_size = page_size;
        }
        if let Some(height) = args.row_height {
            config.list.row_block_height = height;
        }
        if let Some(seed) = args.seed {
            config.list.seed = SeedPolicy::Fixed(seed);
        }
        if let Some(preview) = args.preview {
            config.preview = preview;
        }
        config.list.validate()?;
        if config.list.page_size > MAX_PAGE_SIZE {
            return Err(DemoError::invalid(format!(
                "page size {} exceeds the maximum of {MAX_PAGE_SIZE}",
                config.list.page_size
            )));
        }
        Ok(config)
    }
}
