//! # Generator Configuration
//!
//! Tunable parameters for floor generation. Values are fixed once a
//! [`DungeonGenerator`](crate::DungeonGenerator) is constructed.
//!
//! ## File Format
//!
//! Any subset of keys may be given; missing keys keep their defaults.
//!
//! ```toml
//! min_room_size = 5
//! max_room_size = 15
//! min_split_size = 12
//! corridor_width = 1
//! split_iterations = 8
//! boss_chance = 0.05
//! treasure_chance = 0.15
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DungeonError, DungeonResult};

/// Parameters controlling how each floor is partitioned and furnished.
///
/// All sizes are in tiles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Smallest room side length.
    pub min_room_size: i32,
    /// Largest room side length.
    pub max_room_size: i32,
    /// Minimum size of either half of a partition split.
    pub min_split_size: i32,
    /// Side length of the square carved around each corridor tile.
    pub corridor_width: i32,
    /// Number of passes of the split loop over the partition tree.
    pub split_iterations: u32,
    /// Probability that a non-spawn room becomes a boss room.
    pub boss_chance: f64,
    /// Probability that a non-spawn room becomes a treasure room.
    pub treasure_chance: f64,
}

impl GeneratorConfig {
    /// Default smallest room side.
    pub const DEFAULT_MIN_ROOM_SIZE: i32 = 5;
    /// Default largest room side.
    pub const DEFAULT_MAX_ROOM_SIZE: i32 = 15;
    /// Default minimum split size.
    pub const DEFAULT_MIN_SPLIT_SIZE: i32 = 12;
    /// Default corridor width.
    pub const DEFAULT_CORRIDOR_WIDTH: i32 = 1;
    /// Default number of split passes (up to 256 regions).
    pub const DEFAULT_SPLIT_ITERATIONS: u32 = 8;
    /// Default boss room chance.
    pub const DEFAULT_BOSS_CHANCE: f64 = 0.05;
    /// Default treasure room chance.
    pub const DEFAULT_TREASURE_CHANCE: f64 = 0.15;

    /// Parses a config from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid TOML or a value is out of range.
    pub fn from_toml_str(text: &str) -> DungeonResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is malformed, or fails validation.
    pub fn from_toml_file(path: impl AsRef<Path>) -> DungeonResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DungeonError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serializes the config back to TOML.
    ///
    /// # Errors
    ///
    /// Returns error if a value cannot be represented in TOML (non-finite floats).
    pub fn to_toml_string(&self) -> DungeonResult<String> {
        toml::to_string(self).map_err(|e| DungeonError::InvalidConfig(e.to_string()))
    }

    /// Checks every parameter against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`DungeonError::InvalidConfig`] naming the first offending value.
    pub fn validate(&self) -> DungeonResult<()> {
        if self.min_room_size < 1 {
            return Err(DungeonError::InvalidConfig(format!(
                "min_room_size must be at least 1, got {}",
                self.min_room_size
            )));
        }
        if self.max_room_size < self.min_room_size {
            return Err(DungeonError::InvalidConfig(format!(
                "max_room_size ({}) is smaller than min_room_size ({})",
                self.max_room_size, self.min_room_size
            )));
        }
        if self.min_split_size < 1 {
            return Err(DungeonError::InvalidConfig(format!(
                "min_split_size must be at least 1, got {}",
                self.min_split_size
            )));
        }
        if self.corridor_width < 1 {
            return Err(DungeonError::InvalidConfig(format!(
                "corridor_width must be at least 1, got {}",
                self.corridor_width
            )));
        }
        for (name, chance) in [
            ("boss_chance", self.boss_chance),
            ("treasure_chance", self.treasure_chance),
        ] {
            if !chance.is_finite() || !(0.0..=1.0).contains(&chance) {
                return Err(DungeonError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {chance}"
                )));
            }
        }
        if self.boss_chance + self.treasure_chance > 1.0 {
            return Err(DungeonError::InvalidConfig(format!(
                "boss_chance + treasure_chance must not exceed 1, got {}",
                self.boss_chance + self.treasure_chance
            )));
        }
        Ok(())
    }

    /// Sets the room size range.
    #[must_use]
    pub const fn with_room_size(mut self, min: i32, max: i32) -> Self {
        self.min_room_size = min;
        self.max_room_size = max;
        self
    }

    /// Sets the minimum split size.
    #[must_use]
    pub const fn with_min_split_size(mut self, size: i32) -> Self {
        self.min_split_size = size;
        self
    }

    /// Sets the corridor width.
    #[must_use]
    pub const fn with_corridor_width(mut self, width: i32) -> Self {
        self.corridor_width = width;
        self
    }

    /// Sets the number of split passes.
    #[must_use]
    pub const fn with_split_iterations(mut self, iterations: u32) -> Self {
        self.split_iterations = iterations;
        self
    }

    /// Sets the boss and treasure room chances.
    #[must_use]
    pub fn with_role_chances(mut self, boss: f64, treasure: f64) -> Self {
        self.boss_chance = boss;
        self.treasure_chance = treasure;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_room_size: Self::DEFAULT_MIN_ROOM_SIZE,
            max_room_size: Self::DEFAULT_MAX_ROOM_SIZE,
            min_split_size: Self::DEFAULT_MIN_SPLIT_SIZE,
            corridor_width: Self::DEFAULT_CORRIDOR_WIDTH,
            split_iterations: Self::DEFAULT_SPLIT_ITERATIONS,
            boss_chance: Self::DEFAULT_BOSS_CHANCE,
            treasure_chance: Self::DEFAULT_TREASURE_CHANCE,
        }
    }
}
