// Recalculation constants
pub const EZ_SCALE: f64 = 0.5;
pub const HR_SCALE: f64 = 1.4;
// Circle size uses a smaller HardRock multiplier than the other attributes
pub const HR_CS_SCALE: f64 = 1.3;
pub const ATTRIBUTE_CAP: f64 = 10.0;
pub const DT_AR_CAP: f64 = 11.0;

// Approach window in milliseconds is piecewise linear in AR, hinged at AR 5
pub const AR_MID_POINT: f64 = 5.0;
pub const AR_MID_MS: f64 = 1200.0;
pub const AR_LOW_SLOPE_MS: f64 = 600.0;
pub const AR_HIGH_SLOPE_MS: f64 = 750.0;
// The inverse mapping switches branch at 900ms of unscaled window
pub const AR_INVERT_BREAKPOINT_MS: f64 = 900.0;

// Hit window (ms) = HIT_WINDOW_MAX_MS - HIT_WINDOW_SLOPE_MS * OD
pub const HIT_WINDOW_MAX_MS: f64 = 80.0;
pub const HIT_WINDOW_SLOPE_MS: f64 = 6.0;

// Time scales applied to approach/hit windows and track length
pub const HT_TIME_SCALE: f64 = 4.0 / 3.0;
pub const DT_TIME_SCALE: f64 = 2.0 / 3.0;
pub const HT_BPM_SCALE: f64 = 3.0 / 4.0;
pub const DT_BPM_SCALE: f64 = 3.0 / 2.0;

// Weighted aggregate constants
pub const WEIGHT_FACTOR: f64 = 0.95;
// Limit of the geometric weight series: 1 / (1 - WEIGHT_FACTOR)
pub const MAX_WEIGHT_SUM: f64 = 20.0;

// Leaderboard snapshots are assembled from 200 pages of 50 entries each
pub const LEADERBOARD_PAGE_SIZE: usize = 50;
pub const LEADERBOARD_PAGE_COUNT: usize = 200;
pub const LEADERBOARD_SIZE: usize = LEADERBOARD_PAGE_SIZE * LEADERBOARD_PAGE_COUNT;
