//! Game configuration
//!
//! Defaults come from the constants in the types crate. Each config can also be
//! read from `MINIGAMES_*` environment variables; the binary layers CLI flags
//! on top of that.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `MINIGAMES_DIFFICULTY` | `easy`, `normal` or `hard` |
//! | `MINIGAMES_MEMORY` | `both` or `human-only` |
//! | `MINIGAMES_REVEAL_MS` | Pause before a flipped pair resolves |
//! | `MINIGAMES_MISMATCH_MS` | How long a mismatch stays visible |
//! | `MINIGAMES_THINK_MS` | Delay before a computer turn |
//! | `MINIGAMES_SECOND_FLIP_MS` | Delay between computer flips |
//! | `MINIGAMES_BASE_DROP_MS` | Gravity interval at level 1 |
//! | `MINIGAMES_DROP_STEP_MS` | Gravity speed-up per level |
//! | `MINIGAMES_MIN_DROP_MS` | Gravity floor |

use crate::error::ConfigError;
use crate::types::{
    Difficulty, MemoryPolicy, BASE_DROP_MS, COMPUTER_SECOND_FLIP_MS, COMPUTER_THINK_MS,
    DROP_INTERVAL_MIN_MS, DROP_STEP_MS, MISMATCH_HIDE_MS, REVEAL_DELAY_MS,
};

/// Pairs game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub difficulty: Difficulty,
    pub memory_policy: MemoryPolicy,
    pub reveal_delay_ms: u32,
    pub mismatch_hide_ms: u32,
    pub computer_think_ms: u32,
    pub computer_second_flip_ms: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            memory_policy: MemoryPolicy::Both,
            reveal_delay_ms: REVEAL_DELAY_MS,
            mismatch_hide_ms: MISMATCH_HIDE_MS,
            computer_think_ms: COMPUTER_THINK_MS,
            computer_second_flip_ms: COMPUTER_SECOND_FLIP_MS,
        }
    }
}

impl MatchConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment, tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup("MINIGAMES_DIFFICULTY")) {
            config.difficulty =
                Difficulty::from_str(&raw).ok_or(ConfigError::UnknownDifficulty(raw))?;
        }
        if let Some(raw) = non_empty(lookup("MINIGAMES_MEMORY")) {
            config.memory_policy =
                MemoryPolicy::from_str(&raw).ok_or(ConfigError::UnknownMemoryPolicy(raw))?;
        }
        if let Some(ms) = parse_ms(&lookup, "MINIGAMES_REVEAL_MS")? {
            config.reveal_delay_ms = ms;
        }
        if let Some(ms) = parse_ms(&lookup, "MINIGAMES_MISMATCH_MS")? {
            config.mismatch_hide_ms = ms;
        }
        if let Some(ms) = parse_ms(&lookup, "MINIGAMES_THINK_MS")? {
            config.computer_think_ms = ms;
        }
        if let Some(ms) = parse_ms(&lookup, "MINIGAMES_SECOND_FLIP_MS")? {
            config.computer_second_flip_ms = ms;
        }

        Ok(config)
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_memory_policy(mut self, memory_policy: MemoryPolicy) -> Self {
        self.memory_policy = memory_policy;
        self
    }

    /// All delays set to zero; handy for headless simulations
    pub fn instant(mut self) -> Self {
        self.reveal_delay_ms = 0;
        self.mismatch_hide_ms = 0;
        self.computer_think_ms = 0;
        self.computer_second_flip_ms = 0;
        self
    }
}

/// Falling-block game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlocksConfig {
    pub base_drop_ms: u32,
    pub drop_step_ms: u32,
    pub min_drop_ms: u32,
}

impl Default for BlocksConfig {
    fn default() -> Self {
        Self {
            base_drop_ms: BASE_DROP_MS,
            drop_step_ms: DROP_STEP_MS,
            min_drop_ms: DROP_INTERVAL_MIN_MS,
        }
    }
}

impl BlocksConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(ms) = parse_ms(&lookup, "MINIGAMES_BASE_DROP_MS")? {
            config.base_drop_ms = ms;
        }
        if let Some(ms) = parse_ms(&lookup, "MINIGAMES_DROP_STEP_MS")? {
            config.drop_step_ms = ms;
        }
        if let Some(ms) = parse_ms(&lookup, "MINIGAMES_MIN_DROP_MS")? {
            config.min_drop_ms = ms.max(1);
        }
        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_ms(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u32>, ConfigError> {
    match non_empty(lookup(key)) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}
