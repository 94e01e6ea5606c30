//! Engine configuration.
//!
//! Defaults are usable as-is; `EngineConfig::from_env` applies overrides from
//! `HELIUM_PAGE_CAPACITY` and `HELIUM_DEBUG`.

use thiserror::Error;

use crate::db_warn;
use crate::debugger::{Component, DebugLevel};

pub const DEFAULT_PAGE_CAPACITY: usize = 64;

pub const ENV_PAGE_CAPACITY: &str = "HELIUM_PAGE_CAPACITY";
pub const ENV_DEBUG: &str = "HELIUM_DEBUG";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("page capacity must be at least 1 (got {0})")]
    InvalidPageCapacity(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    page_capacity: usize,
    debug_level: DebugLevel,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_capacity: DEFAULT_PAGE_CAPACITY,
            debug_level: DebugLevel::Off,
        }
    }
}

impl EngineConfig {
    /// Rows per heap page.
    pub fn page_capacity(&self) -> usize {
        self.page_capacity
    }

    pub fn debug_level(&self) -> DebugLevel {
        self.debug_level
    }

    pub fn with_page_capacity(mut self, page_capacity: usize) -> Result<Self, ConfigError> {
        if page_capacity == 0 {
            return Err(ConfigError::InvalidPageCapacity(page_capacity));
        }
        self.page_capacity = page_capacity;
        Ok(self)
    }

    pub fn with_debug_level(mut self, level: DebugLevel) -> Self {
        self.debug_level = level;
        self
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    ///
    /// Values that do not parse are ignored with a warning; a page capacity
    /// of zero is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PAGE_CAPACITY) {
            match raw.trim().parse::<usize>() {
                Ok(n) => config = config.with_page_capacity(n)?,
                Err(_) => {
                    db_warn!(Component::Config, "ignoring {}={:?}", ENV_PAGE_CAPACITY, raw);
                }
            }
        }

        if let Some(raw) = lookup(ENV_DEBUG) {
            match raw.parse::<DebugLevel>() {
                Ok(level) => config.debug_level = level,
                Err(e) => {
                    db_warn!(Component::Config, "ignoring {}: {}", ENV_DEBUG, e);
                }
            }
        }

        Ok(config)
    }
}
