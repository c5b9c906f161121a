use serde::{Deserialize, Serialize};

/// Beatmap difficulty payload as served by the upstream API. Field names
/// follow the upstream schema: `accuracy` is overall difficulty and `drain`
/// is health drain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeatmapResponse {
    pub id: i64,
    pub difficulty_rating: f64,
    pub ar: f64,
    pub accuracy: f64,
    pub drain: f64,
    pub cs: f64,
    pub total_length: f64,
    pub hit_length: f64,
    pub bpm: f64
}

/// One ranked play. `pp` is null upstream for unranked targets; `accuracy`
/// is a fraction in [0, 1]. `mods` holds two-letter modifier codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub pp: Option<f64>,
    pub accuracy: f64,
    pub mods: Vec<String>
}

/// A single user row from a rankings page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatistics {
    pub pp: f64,
    pub global_rank: Option<i32>
}

/// One page of a paginated rankings response (50 rows per page upstream).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingsPage {
    pub ranking: Vec<UserStatistics>
}

/// Offline bundle of one user's profile data, as consumed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDump {
    pub beatmap: BeatmapResponse,
    pub scores: Vec<ScoreResponse>
}
