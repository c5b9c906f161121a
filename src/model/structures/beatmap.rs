use serde::{Deserialize, Serialize};

/// Base difficulty attributes of a beatmap, before any modifiers apply.
/// AR/OD/HP/CS are conventionally in [0, 10]; lengths are in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BeatmapAttributes {
    pub ar: f64,
    pub od: f64,
    pub hp: f64,
    pub cs: f64,
    pub total_length: f64,
    pub drain_length: f64,
    pub bpm: f64
}

/// Difficulty attributes after modifier recalculation. AR may exceed 10 here
/// (DoubleTime caps it at 11).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RecalculatedStats {
    pub ar: f64,
    pub od: f64,
    pub hp: f64,
    pub cs: f64,
    pub total_length: f64,
    pub drain_length: f64,
    pub bpm: f64
}
