use std::fs;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use osu_stats_processor::{
    api::{self, api_structs::ProfileDump},
    model::{
        aggregates::{calculate_overall_acc_no_selection, calculate_total_pp_no_selection},
        map_stats::calculate_map_stats,
        structures::mods::{calculate_mod_value, ModFlags}
    }
};

mod args;

use args::Args;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let raw = fs::read_to_string(&args.input).expect("Expected a readable profile dump file");
    let dump: ProfileDump = serde_json::from_str(&raw).expect("Expected valid profile dump JSON");

    let mod_value = calculate_mod_value(&args.mods).expect("Expected known modifier codes");
    let flags = ModFlags::from_bits(mod_value);

    info!("Recalculating beatmap {} with mod value {}", dump.beatmap.id, mod_value);

    let stats = calculate_map_stats(&api::beatmap_attributes(&dump.beatmap), flags);
    let total_pp = calculate_total_pp_no_selection(&api::pp_values(&dump.scores));
    let overall_acc = calculate_overall_acc_no_selection(&api::accuracy_values(&dump.scores));

    println!("{:?}", stats);
    println!("Weighted pp: {:.2}", total_pp);
    println!("Overall accuracy: {:.2}%", overall_acc);
}
