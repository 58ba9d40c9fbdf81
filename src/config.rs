//! Game configuration loaded from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::BoardSize;
use crate::error::ConfigError;
use crate::game::Variant;

/// Settings a new session is created from.
///
/// Missing keys fall back to the standard variant on a 15x15 board:
///
/// ```toml
/// variant = "pro"
/// board_size = 19
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub variant: Variant,
    pub board_size: BoardSize,
}

impl GameConfig {
    pub fn new(variant: Variant, board_size: BoardSize) -> Self {
        Self { variant, board_size }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] if the file cannot be read, [`ConfigError::Parse`]
    /// for malformed TOML, an unknown variant, or an unsupported board size.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        info!(variant = %config.variant, board_size = %config.board_size, "Config loaded");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Replace the fields that were given explicitly
    pub fn with_overrides(
        mut self,
        variant: Option<Variant>,
        board_size: Option<BoardSize>,
    ) -> Self {
        if let Some(variant) = variant {
            self.variant = variant;
        }
        if let Some(board_size) = board_size {
            self.board_size = board_size;
        }
        self
    }
}
