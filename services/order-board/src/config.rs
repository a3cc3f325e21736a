//! Configuration for the order board

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BoardError, BoardResult};

/// Prefix for environment overrides, e.g. `ORDER_BOARD_NAME`
pub const ENV_PREFIX: &str = "ORDER_BOARD";

/// Order board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Board name, attached to every log event
    pub name: String,
    /// Initial capacity of the live order set
    pub order_capacity: usize,
    /// Rows per side returned by a default depth query
    pub max_depth_levels: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "live-order-board".to_string(),
            order_capacity: 1024,
            max_depth_levels: 100,
        }
    }
}

impl BoardConfig {
    /// Load from a file, with `ORDER_BOARD_*` environment variables on top.
    /// Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> BoardResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `ORDER_BOARD_*` environment variables on top
    pub fn from_env() -> BoardResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Set the board name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the initial order set capacity
    #[must_use]
    pub const fn with_order_capacity(mut self, order_capacity: usize) -> Self {
        self.order_capacity = order_capacity;
        self
    }

    /// Set the default depth
    #[must_use]
    pub const fn with_max_depth_levels(mut self, max_depth_levels: usize) -> Self {
        self.max_depth_levels = max_depth_levels;
        self
    }

    /// Reject settings the board cannot run with
    pub fn validate(&self) -> BoardResult<()> {
        if self.name.trim().is_empty() {
            return Err(BoardError::Configuration {
                message: "name must not be empty".to_string(),
            });
        }
        if self.max_depth_levels == 0 {
            return Err(BoardError::Configuration {
                message: "max_depth_levels must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
