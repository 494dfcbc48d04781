//! Bot configuration parameters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseDifficultyError;

/// Difficulty tier. Higher tiers never play weaker than lower ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Takes a goal when one is on offer, otherwise plays at random.
    Easy,
    /// One-ply greedy on the position heuristic.
    #[default]
    Medium,
    /// Alpha-beta lookahead that accounts for the opponent's replies.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// The preset configuration for this tier.
    #[must_use]
    pub fn config(self) -> BotConfig {
        let base = BotConfig {
            difficulty: self,
            ..BotConfig::default()
        };
        match self {
            Difficulty::Easy => base.with_depth(0).with_noise(0),
            Difficulty::Medium => base.with_depth(1).with_noise(60),
            Difficulty::Hard => base.with_depth(2).with_noise(0),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// Bot configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Which policy to run.
    pub difficulty: Difficulty,

    /// Random seed for tie-breaks and noise.
    /// Same seed and state produce the same move.
    pub seed: u64,

    /// Plies searched by the lookahead policy (Hard). Minimum 1.
    pub depth: u32,

    /// Upper bound of the random jitter added to one-ply scores (Medium).
    /// 0 disables jitter.
    pub noise: u32,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            seed: 42,
            depth: 1,
            noise: 60,
        }
    }
}

impl BotConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom jitter bound.
    pub fn with_noise(mut self, noise: u32) -> Self {
        self.noise = noise;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BotConfig::default();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.seed, 42);
        assert_eq!(config.depth, 1);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Difficulty::Easy.config().difficulty, Difficulty::Easy);
        assert_eq!(Difficulty::Hard.config().depth, 2);
        assert_eq!(Difficulty::Hard.config().noise, 0);
        assert!(Difficulty::Medium.config().noise > 0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = Difficulty::Hard.config().with_seed(7).with_depth(3);

        assert_eq!(config.seed, 7);
        assert_eq!(config.depth, 3);
        assert_eq!(config.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(ParseDifficultyError("expert".to_string()))
        );
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
    }

    #[test]
    fn test_serialization() {
        let config = Difficulty::Easy.config().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"easy\""));

        let deserialized: BotConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
