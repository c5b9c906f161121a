pub mod aggregates;
pub mod constants;
pub mod map_stats;
pub mod rank;
pub mod structures;
