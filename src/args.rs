use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Clone)]
#[command(
    display_name = "osu! Stats Processor",
    long_about = "Recalculates beatmap difficulty attributes and weighted profile aggregates for osu! score data"
)]
pub struct Args {
    /// JSON dump of a user's beatmap and score data, shaped like the
    /// upstream API responses
    #[arg(short, long, env, help = "Path to a profile dump JSON file")]
    pub input: PathBuf,

    /// Two-letter modifier codes applied to the beatmap recalculation
    #[arg(short, long, value_delimiter = ',', help = "Modifier codes, e.g. HD,DT")]
    pub mods: Vec<String>
}
