pub mod beatmap;
pub mod leaderboard;
pub mod mods;
