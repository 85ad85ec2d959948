use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropadjust",
    version,
    about = "Season-aware crop growth adjustments"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Content pack directories to load instead of the configured ones
    #[arg(short, long, global = true, value_delimiter = ',')]
    pub packs: Vec<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive configuration setup
    Init,
    /// Load content packs and report problems
    Check,
    /// List loaded crop adjustments in load order
    Rules,
    /// Run the phase-advance adjustment on a crop
    Advance(AdvanceArgs),
    /// Run the daily wither check on a planted tile
    Wither(WitherArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CropArgs {
    /// Produce item id of the planted crop
    #[arg(long)]
    pub crop: String,

    /// Active season at the crop's location
    #[arg(long)]
    pub season: String,

    /// World calendar season, when it differs from the location's season
    #[arg(long)]
    pub world_season: Option<String>,

    /// Name of the crop's location
    #[arg(long, default_value = "Farm")]
    pub location: String,

    /// Days per growth phase, including the host's 99999 sentinel if present
    #[arg(long, value_delimiter = ',', required = true)]
    pub phase_days: Vec<i32>,

    #[arg(long, default_value_t = 0)]
    pub phase: i32,

    #[arg(long, default_value_t = 0)]
    pub day: i32,

    /// The crop regrows after harvest
    #[arg(long)]
    pub regrows: bool,

    /// Soil watering state (0 dry, 1 watered)
    #[arg(long, default_value_t = 1)]
    pub state: i32,

    /// Fertilizer item code in the tile
    #[arg(long, default_value_t = 0)]
    pub fertilizer: i32,

    /// Print the outcome and resulting state as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AdvanceArgs {
    #[command(flatten)]
    pub crop: CropArgs,
}

#[derive(Args, Debug, Clone)]
pub struct WitherArgs {
    #[command(flatten)]
    pub crop: CropArgs,

    /// The crop is a paddy crop
    #[arg(long)]
    pub paddy: bool,

    /// The paddy crop is next to water
    #[arg(long, requires = "paddy")]
    pub near_water: bool,

    /// Seed for the water-retention draw; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}
