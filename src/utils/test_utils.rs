use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::{
    constants::LEADERBOARD_SIZE,
    structures::leaderboard::{LeaderboardEntry, LeaderboardSnapshot}
};

/// Generates a full leaderboard with strictly descending pp values starting
/// just below `top_pp` and rank increasing from 1. Seeded for reproducible
/// results.
pub fn generate_leaderboard(top_pp: f64, seed: u64) -> Vec<LeaderboardEntry> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut entries = Vec::with_capacity(LEADERBOARD_SIZE);
    let mut pp = top_pp;

    for i in 0..LEADERBOARD_SIZE {
        pp -= rng.random_range(0.01..2.0);

        entries.push(LeaderboardEntry {
            pp,
            rank: i as i32 + 1
        });
    }

    entries
}

/// Generates a global/country snapshot pair. The country list starts lower
/// than the global cutoff so both search paths are reachable.
pub fn generate_snapshot(seed: u64) -> LeaderboardSnapshot {
    let global = generate_leaderboard(50_000.0, seed);
    let country = generate_leaderboard(25_000.0, seed.wrapping_add(1));

    LeaderboardSnapshot::new(global, country)
        .expect("generated leaderboards should match the snapshot size")
}

/// Generates `n` pp values in descending order, the order the upstream
/// source assigns to a player's best plays.
pub fn generate_pp_values(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values = Vec::with_capacity(n);
    let mut pp = 800.0;

    for _ in 0..n {
        pp -= rng.random_range(0.0..3.0);
        values.push(pp);
    }

    values
}

/// Generates `n` accuracy fractions in [0.8, 1.0].
pub fn generate_acc_values(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..n).map(|_| rng.random_range(0.8..=1.0)).collect()
}
