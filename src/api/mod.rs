pub mod api_structs;

use crate::{
    api::api_structs::{BeatmapResponse, RankingsPage, ScoreResponse},
    model::structures::{
        beatmap::BeatmapAttributes,
        leaderboard::{LeaderboardEntry, LeaderboardError, LeaderboardSnapshot}
    }
};

/// Maps an upstream beatmap payload onto the recalculation input record.
pub fn beatmap_attributes(beatmap: &BeatmapResponse) -> BeatmapAttributes {
    BeatmapAttributes {
        ar: beatmap.ar,
        od: beatmap.accuracy,
        hp: beatmap.drain,
        cs: beatmap.cs,
        total_length: beatmap.total_length,
        drain_length: beatmap.hit_length,
        bpm: beatmap.bpm
    }
}

/// Extracts per-play pp values in list order. Plays without a pp value
/// contribute 0.
pub fn pp_values(scores: &[ScoreResponse]) -> Vec<f64> {
    scores.iter().map(|s| s.pp.unwrap_or(0.0)).collect()
}

/// Extracts per-play accuracy fractions in list order.
pub fn accuracy_values(scores: &[ScoreResponse]) -> Vec<f64> {
    scores.iter().map(|s| s.accuracy).collect()
}

/// Flattens paginated rankings into a single leaderboard. The upstream rank
/// is kept when present; rows without one fall back to their list position.
pub fn leaderboard_from_pages(pages: &[RankingsPage]) -> Vec<LeaderboardEntry> {
    pages
        .iter()
        .flat_map(|page| &page.ranking)
        .enumerate()
        .map(|(i, row)| LeaderboardEntry {
            pp: row.pp,
            rank: row.global_rank.unwrap_or(i as i32 + 1)
        })
        .collect()
}

/// Assembles a rank-estimation snapshot from paginated global and country
/// rankings (200 pages of 50 rows each).
pub fn snapshot_from_pages(
    global: &[RankingsPage],
    country: &[RankingsPage]
) -> Result<LeaderboardSnapshot, LeaderboardError> {
    LeaderboardSnapshot::new(leaderboard_from_pages(global), leaderboard_from_pages(country))
}
