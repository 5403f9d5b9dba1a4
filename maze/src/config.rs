use clap::Parser;
use rand::SeedableRng;
use rand_wyrand::WyRand;
use serde::{Deserialize, Serialize};

use crate::MazeGrid;

/// Config for generating a maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed of the maze
    /// -> None means a new seed is drawn on every generation
    pub seed: Option<u64>,
    /// Number of rows
    pub rows: i64,
    /// Number of columns
    pub cols: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            rows: 10,
            cols: 10,
        }
    }
}

impl Config {
    /// Random number generator for a generation
    pub fn rng(&self) -> WyRand {
        let seed = self.seed.unwrap_or_else(|| {
            let seed = rand::random();
            log::info!("Using random seed {seed}");
            seed
        });
        WyRand::seed_from_u64(seed)
    }

    /// Generate a maze with this config
    pub fn generate(&self) -> MazeGrid {
        crate::generate(self.rows, self.cols, &mut self.rng())
    }
}

/// Partial config for a maze
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Parser, Default)]
pub struct PartialConfig {
    /// Seed of the maze
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Number of rows
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<i64>,
    /// Number of columns
    #[clap(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<i64>,
}
impl PartialConfig {
    /// Take the values of `other` where present
    pub fn merge(self, other: PartialConfig) -> Self {
        Self {
            seed: other.seed.or(self.seed),
            rows: other.rows.or(self.rows),
            cols: other.cols.or(self.cols),
        }
    }
    pub fn or_defaults(self) -> Config {
        let default = Config::default();
        Config {
            seed: self.seed.or(default.seed),
            rows: self.rows.unwrap_or(default.rows),
            cols: self.cols.unwrap_or(default.cols),
        }
    }
}
