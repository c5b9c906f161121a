use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::constants::LEADERBOARD_SIZE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeaderboardError {
    #[error("expected {expected} entries in the {name} leaderboard, got {actual}")]
    InvalidSize {
        name: &'static str,
        expected: usize,
        actual: usize
    }
}

/// One leaderboard row: a performance value and the rank it occupies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    pub pp: f64,
    pub rank: i32
}

/// Immutable pair of global and country leaderboards used for rank
/// estimation. Both lists hold exactly [`LEADERBOARD_SIZE`] entries, sorted
/// by descending pp with rank strictly increasing from 1.
#[derive(Debug, Clone)]
pub struct LeaderboardSnapshot {
    global: Vec<LeaderboardEntry>,
    country: Vec<LeaderboardEntry>
}

impl LeaderboardSnapshot {
    pub fn new(
        global: Vec<LeaderboardEntry>,
        country: Vec<LeaderboardEntry>
    ) -> Result<Self, LeaderboardError> {
        if global.len() != LEADERBOARD_SIZE {
            return Err(LeaderboardError::InvalidSize {
                name: "global",
                expected: LEADERBOARD_SIZE,
                actual: global.len()
            });
        }

        if country.len() != LEADERBOARD_SIZE {
            return Err(LeaderboardError::InvalidSize {
                name: "country",
                expected: LEADERBOARD_SIZE,
                actual: country.len()
            });
        }

        Ok(Self { global, country })
    }

    pub fn global(&self) -> &[LeaderboardEntry] {
        &self.global
    }

    pub fn country(&self) -> &[LeaderboardEntry] {
        &self.country
    }
}
