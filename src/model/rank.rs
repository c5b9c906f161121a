use tracing::debug;

use crate::model::structures::leaderboard::LeaderboardSnapshot;

/// Strategy seam for estimating the rank a performance value would occupy
/// in a leaderboard snapshot. [`LegacyRankEstimator`] is the default; the
/// indirection exists so a corrected search can be swapped in later without
/// touching callers.
pub trait RankEstimator {
    fn estimate_rank(&self, pp: f64, snapshot: &LeaderboardSnapshot) -> i32;
}

/// Bound-converging search preserved for output compatibility with
/// historical rank estimates.
///
/// This is not a textbook binary search: `curr` is re-derived as
/// `round((min + max) / 2)` after each one-past-the-midpoint bound update,
/// and the loop stops on exact match or once `min >= max`. It can probe more
/// than ceil(log2(n)) entries near boundary patterns. Downstream consumers
/// pin its exact output, so it must not be replaced with a corrected
/// variant; implement a new [`RankEstimator`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyRankEstimator;

impl RankEstimator for LegacyRankEstimator {
    fn estimate_rank(&self, pp: f64, snapshot: &LeaderboardSnapshot) -> i32 {
        let global = snapshot.global();

        // Targets below the global cutoff are searched on the country list
        let (name, leaderboard) = if pp < global[global.len() - 1].pp {
            ("country", snapshot.country())
        } else {
            ("global", global)
        };

        debug!(pp, leaderboard = name, "estimating rank");

        let mut min: i64 = 0;
        let mut max: i64 = leaderboard.len() as i64 - 1;
        let mut curr = midpoint(min, max);

        while min < max {
            let curr_pp = leaderboard[curr as usize].pp;

            if pp == curr_pp {
                break;
            }

            if pp < curr_pp {
                min = curr + 1;
            } else {
                max = curr - 1;
            }

            curr = midpoint(min, max);
        }

        // Bounds can overshoot the list by one once they cross; targets
        // outside the snapshot's range resolve to the boundary entry
        let last = leaderboard.len() as i64 - 1;
        leaderboard[curr.clamp(0, last) as usize].rank
    }
}

// Round-half-up midpoint; min is never negative and max is at least -1
fn midpoint(min: i64, max: i64) -> i64 {
    (min + max + 1) / 2
}

/// Estimates a rank with the default [`LegacyRankEstimator`].
pub fn estimate_rank(pp: f64, snapshot: &LeaderboardSnapshot) -> i32 {
    LegacyRankEstimator.estimate_rank(pp, snapshot)
}
