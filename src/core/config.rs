//! Session configuration.
//!
//! `LevelConfig` maps a 1-based level number to the three integers the
//! engine consumes: how many cards the level deals initially, how many an
//! extra draw adds, and the score needed to win. It is built once at
//! session start and never mutated afterwards; level tuning happens by
//! constructing a different config, not by poking setters at runtime.
//!
//! Lookups for a level that was never configured fall back to documented
//! defaults and log a warning, so a mis-wired host degrades instead of
//! crashing.

use serde::{Deserialize, Serialize};

/// Fallback initial card count for unconfigured levels.
pub const DEFAULT_INITIAL_CARDS: usize = 10;

/// Fallback additional card count for unconfigured levels.
pub const DEFAULT_ADDITIONAL_CARDS: usize = 3;

/// Fallback win score for unconfigured levels.
pub const DEFAULT_WIN_SCORE: u32 = 10_000;

/// Per-level tuning values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSettings {
    /// Cards dealt into the hand when the level starts.
    pub initial_cards: usize,

    /// Cards added by one extra draw.
    pub additional_cards: usize,

    /// Score threshold for winning at this level.
    pub win_score: u32,
}

impl LevelSettings {
    /// Create level settings.
    #[must_use]
    pub const fn new(initial_cards: usize, additional_cards: usize, win_score: u32) -> Self {
        Self {
            initial_cards,
            additional_cards,
            win_score,
        }
    }
}

/// Immutable level table consulted by the session layer.
///
/// Levels are numbered from 1; level `n` reads `levels[n - 1]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    levels: Vec<LevelSettings>,
}

impl LevelConfig {
    /// Create a config from an ordered list of level settings.
    #[must_use]
    pub fn new(levels: Vec<LevelSettings>) -> Self {
        Self { levels }
    }

    /// Number of configured levels.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Whether `level` (1-based) is configured.
    #[must_use]
    pub fn has_level(&self, level: u32) -> bool {
        level >= 1 && (level as usize) <= self.levels.len()
    }

    fn settings(&self, level: u32) -> Option<&LevelSettings> {
        if level < 1 {
            return None;
        }
        self.levels.get(level as usize - 1)
    }

    /// Initial card count for `level`, or the documented fallback.
    #[must_use]
    pub fn initial_card_count(&self, level: u32) -> usize {
        match self.settings(level) {
            Some(settings) => settings.initial_cards,
            None => {
                log::warn!("unknown level {level}, using default initial card count");
                DEFAULT_INITIAL_CARDS
            }
        }
    }

    /// Additional card count for `level`, or the documented fallback.
    #[must_use]
    pub fn additional_card_count(&self, level: u32) -> usize {
        match self.settings(level) {
            Some(settings) => settings.additional_cards,
            None => {
                log::warn!("unknown level {level}, using default additional card count");
                DEFAULT_ADDITIONAL_CARDS
            }
        }
    }

    /// Win score for `level`, or the documented fallback.
    #[must_use]
    pub fn win_score(&self, level: u32) -> u32 {
        match self.settings(level) {
            Some(settings) => settings.win_score,
            None => {
                log::warn!("unknown level {level}, using default win score");
                DEFAULT_WIN_SCORE
            }
        }
    }
}

impl Default for LevelConfig {
    /// The stock two-level campaign.
    fn default() -> Self {
        Self::new(vec![
            LevelSettings::new(20, 5, 1_000),
            LevelSettings::new(30, 3, 3_000),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_levels() {
        let config = LevelConfig::default();

        assert_eq!(config.level_count(), 2);
        assert_eq!(config.initial_card_count(1), 20);
        assert_eq!(config.additional_card_count(1), 5);
        assert_eq!(config.win_score(1), 1_000);
        assert_eq!(config.initial_card_count(2), 30);
        assert_eq!(config.additional_card_count(2), 3);
        assert_eq!(config.win_score(2), 3_000);
    }

    #[test]
    fn test_unknown_level_fallbacks() {
        let config = LevelConfig::default();

        assert_eq!(config.initial_card_count(0), DEFAULT_INITIAL_CARDS);
        assert_eq!(config.initial_card_count(3), DEFAULT_INITIAL_CARDS);
        assert_eq!(config.additional_card_count(99), DEFAULT_ADDITIONAL_CARDS);
        assert_eq!(config.win_score(99), DEFAULT_WIN_SCORE);
    }

    #[test]
    fn test_has_level() {
        let config = LevelConfig::default();

        assert!(!config.has_level(0));
        assert!(config.has_level(1));
        assert!(config.has_level(2));
        assert!(!config.has_level(3));
    }

    #[test]
    fn test_custom_table() {
        let config = LevelConfig::new(vec![LevelSettings::new(8, 2, 500)]);

        assert_eq!(config.level_count(), 1);
        assert_eq!(config.initial_card_count(1), 8);
        assert_eq!(config.win_score(2), DEFAULT_WIN_SCORE);
    }

    #[test]
    fn test_serialization() {
        let config = LevelConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: LevelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
