//! Rule configuration for a game.

use super::rules::LineScan;
use super::types::Symbol;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Whether the engine checks whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOrder {
    /// Any mark may be placed on any move.
    #[default]
    Unchecked,
    /// Each move must use the opponent of the previous move's mark.
    Alternating,
}

/// Rules a [`crate::Game`] is played under.
///
/// The default is the permissive engine: no turn checking and the
/// first-complete line scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Turn-order enforcement.
    #[serde(default)]
    turn_order: TurnOrder,

    /// Mark required on the first move under alternation.
    #[serde(default)]
    first_player: Option<Symbol>,

    /// Line-scan mode used to detect wins.
    #[serde(default)]
    line_scan: LineScan,
}

impl RulesConfig {
    /// Creates a configuration from its parts.
    pub fn new(turn_order: TurnOrder, first_player: Option<Symbol>, line_scan: LineScan) -> Self {
        Self {
            turn_order,
            first_player,
            line_scan,
        }
    }

    /// Alternating turns with `first` to move.
    pub fn alternating(first: Symbol) -> Self {
        Self::new(TurnOrder::Alternating, Some(first), LineScan::default())
    }

    /// Returns a copy using the given line-scan mode.
    pub fn with_line_scan(self, line_scan: LineScan) -> Self {
        Self { line_scan, ..self }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Parsed rules config");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(turn_order = ?config.turn_order, line_scan = ?config.line_scan, "Config loaded successfully");
        Ok(config)
    }

    /// The mark expected next, given the previous accepted mark.
    ///
    /// `None` means any mark is acceptable.
    pub(crate) fn expected_mark(&self, previous: Option<Symbol>) -> Option<Symbol> {
        match self.turn_order {
            TurnOrder::Unchecked => None,
            TurnOrder::Alternating => match previous {
                Some(mark) => Some(mark.opponent()),
                None => self.first_player,
            },
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
