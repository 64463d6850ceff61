//! Sheet configuration loaded from a JSON file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::LayoutError;
use crate::layout::SheetLayout;
use crate::views::log_sheet::SheetOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid sheet layout: {0}")]
    Layout(#[from] LayoutError),
}

/// Layout and presentation settings. Missing keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub layout: SheetLayout,
    pub options: SheetOptions,
}

impl SheetConfig {
    /// Parse and validate a config document.
    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        let config: SheetConfig = serde_json::from_slice(data)?;
        config.layout.validate()?;
        Ok(config)
    }
}
