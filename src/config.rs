//! Game and engine configuration
//!
//! Plain structs with presets. The engine trusts whatever it is given;
//! drivers call [`GameConfig::validate`] before starting a game.

use crate::error::ConfigError;

/// Board geometry and rule variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: u8,
    pub rows: u8,
    /// Run length needed to win
    pub k: u8,
    /// Pieces drop to the lowest empty cell of a column
    pub gravity: bool,
}

impl GameConfig {
    pub fn new(cols: u8, rows: u8, k: u8, gravity: bool) -> Self {
        Self {
            cols,
            rows,
            k,
            gravity,
        }
    }

    /// 7x6, four in a row, gravity.
    pub fn connect_four() -> Self {
        Self::new(7, 6, 4, true)
    }

    /// 15x15, five in a row, free placement.
    pub fn gomoku() -> Self {
        Self::new(15, 15, 5, false)
    }

    /// 3x3, three in a row, free placement.
    pub fn tic_tac_toe() -> Self {
        Self::new(3, 3, 3, false)
    }

    /// Reject setups the engine cannot play sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::ZeroDimension {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if self.k == 0 {
            return Err(ConfigError::ZeroRunLength);
        }
        if self.k > self.cols && self.k > self.rows {
            return Err(ConfigError::RunLengthTooLong {
                k: self.k,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Short human-readable name, e.g. `7x6 k=4 gravity`.
    pub fn label(&self) -> String {
        format!(
            "{}x{} k={}{}",
            self.cols,
            self.rows,
            self.k,
            if self.gravity { " gravity" } else { "" }
        )
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::connect_four()
    }
}

/// Per-request search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Wall-clock budget for one move request
    pub deadline_ms: u64,
    /// Block until the deadline before answering
    pub hold_until_deadline: bool,
    /// Stop deepening after this depth
    pub max_depth: Option<u32>,
    /// Seed for the first-depth placeholder pick, OS entropy if `None`
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn with_deadline(deadline_ms: u64) -> Self {
        Self {
            deadline_ms,
            ..Self::default()
        }
    }

    pub fn hold(mut self, hold: bool) -> Self {
        self.hold_until_deadline = hold;
        self
    }

    pub fn max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            deadline_ms: 1000,
            hold_until_deadline: true,
            max_depth: None,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for game in [
            GameConfig::connect_four(),
            GameConfig::gomoku(),
            GameConfig::tic_tac_toe(),
        ] {
            assert_eq!(game.validate(), Ok(()), "{}", game.label());
        }
        assert!(GameConfig::connect_four().gravity);
        assert!(!GameConfig::gomoku().gravity);
    }

    #[test]
    fn test_validate_rejects_bad_setups() {
        assert_eq!(
            GameConfig::new(0, 5, 3, false).validate(),
            Err(ConfigError::ZeroDimension { cols: 0, rows: 5 })
        );
        assert_eq!(
            GameConfig::new(3, 3, 0, false).validate(),
            Err(ConfigError::ZeroRunLength)
        );
        assert_eq!(
            GameConfig::new(3, 2, 4, true).validate(),
            Err(ConfigError::RunLengthTooLong { k: 4, cols: 3, rows: 2 })
        );
        // A run that only fits one way is still fine.
        assert_eq!(GameConfig::new(4, 2, 3, true).validate(), Ok(()));
    }

    #[test]
    fn test_label() {
        assert_eq!(GameConfig::connect_four().label(), "7x6 k=4 gravity");
        assert_eq!(GameConfig::tic_tac_toe().label(), "3x3 k=3");
    }

    #[test]
    fn test_engine_config_builders() {
        let cfg = EngineConfig::with_deadline(250).hold(false).max_depth(4).seed(9);
        assert_eq!(cfg.deadline_ms, 250);
        assert!(!cfg.hold_until_deadline);
        assert_eq!(cfg.max_depth, Some(4));
        assert_eq!(cfg.seed, Some(9));

        let default = EngineConfig::default();
        assert_eq!(default.deadline_ms, 1000);
        assert!(default.hold_until_deadline);
    }
}
