mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{AdvanceArgs, Cli, Commands, CropArgs, WitherArgs};
use crop_adjustments::config::Config;
use crop_adjustments::content::{load_catalog, LoadReport};
use crop_adjustments::models::{
    CropSnapshot, LocationSnapshot, SoilSnapshot, TilePosition, WaterState,
};
use crop_adjustments::{AdjustmentDispatcher, RuleCatalog};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        init_logging(cli.verbose, None);
        let (_, path) = Config::setup_interactive().context("Setup failed")?;
        tracing::info!("Wrote config to {}", path.display());
        return Ok(());
    }

    let config = load_config(&cli)?;
    init_logging(cli.verbose, Some(&config.logging.level));

    let roots = if cli.packs.is_empty() {
        config.content_packs.directories.clone()
    } else {
        cli.packs.clone()
    };
    let (catalog, report) = load_catalog(&roots).context("Failed to load content packs")?;

    match &cli.command {
        Commands::Init => {}
        Commands::Check => print_check(&catalog, &report),
        Commands::Rules => print_rules(&catalog),
        Commands::Advance(args) => run_advance(&catalog, args)?,
        Commands::Wither(args) => run_wither(&catalog, args)?,
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    // Explicit pack directories make a config file optional.
    if !cli.packs.is_empty() && !Config::exists(cli.config.as_ref()) {
        return Ok(Config::default());
    }

    Config::load(cli.config.clone()).context("Configuration error")
}

fn init_logging(verbose: u8, configured: Option<&str>) {
    let fallback = match verbose {
        0 => configured.unwrap_or("warn").to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_check(catalog: &RuleCatalog, report: &LoadReport) {
    println!(
        "Loaded {} crop adjustments from {} content packs",
        catalog.len(),
        report.packs.len()
    );
    for pack in &report.packs {
        println!(
            "  {} ({}) - {} rules - {}",
            pack.name,
            pack.unique_id,
            pack.rules,
            pack.path.display()
        );
    }

    if !report.skipped.is_empty() {
        println!();
        println!("Skipped:");
        for (path, reason) in &report.skipped {
            println!("  {}: {}", path.display(), reason);
        }
    }

    if !report.rejected.is_empty() {
        println!();
        println!("Rejected:");
        for reason in &report.rejected {
            println!("  {}", reason);
        }
    }

    if !report.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &report.warnings {
            println!("  {}", warning);
        }
    }

    let duplicates = catalog.duplicate_ids();
    if !duplicates.is_empty() {
        println!();
        println!("Crops adjusted by more than one rule (first loaded applies):");
        for id in duplicates {
            println!("  {}", id);
        }
    }
}

fn print_rules(catalog: &RuleCatalog) {
    if catalog.is_empty() {
        println!("No crop adjustments loaded");
        return;
    }

    for rule in catalog.iter() {
        println!("{} [{}]", rule.label(), rule.produce_item_id);
        println!("  grows in:    {}", rule.grow_seasons);
        println!("  produces in: {}", rule.produce_seasons);
        if !rule.default_behavior_locations.is_empty() {
            println!("  default in:  {}", rule.default_behavior_locations);
        }
    }
}

fn location_snapshot(args: &CropArgs) -> LocationSnapshot {
    let location = LocationSnapshot::new(args.location.clone(), args.season.clone());
    match &args.world_season {
        Some(world) => location.with_world_season(world.clone()),
        None => location,
    }
}

fn crop_snapshot(args: &CropArgs) -> CropSnapshot {
    let mut crop =
        CropSnapshot::new(args.crop.clone(), args.phase_days.clone()).at(args.phase, args.day);
    crop.regrows_after_harvest = args.regrows;
    crop
}

fn run_advance(catalog: &RuleCatalog, args: &AdvanceArgs) -> Result<()> {
    let args = &args.crop;
    let location = location_snapshot(args);
    let mut crop = crop_snapshot(args);

    let outcome = AdjustmentDispatcher::new(catalog)
        .phase_advance(&mut crop, WaterState(args.state), &location)
        .context("Phase adjustment failed")?;

    if args.json {
        let body = json!({ "outcome": outcome, "crop": crop });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", outcome);
        println!(
            "phase {} day {}{}",
            crop.current_phase,
            crop.day_of_current_phase,
            if crop.dead { " (dead)" } else { "" }
        );
    }

    Ok(())
}

fn run_wither(catalog: &RuleCatalog, args: &WitherArgs) -> Result<()> {
    let location = location_snapshot(&args.crop);
    let mut soil = SoilSnapshot {
        crop: Some(crop_snapshot(&args.crop)),
        state: WaterState(args.crop.state),
        fertilizer: args.crop.fertilizer,
        paddy_crop: args.paddy,
        near_water: args.near_water,
        sprite_refreshes: 0,
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let outcome = AdjustmentDispatcher::new(catalog)
        .daily_wither_check(&mut soil, &location, TilePosition::default(), &mut rng)
        .context("Wither check failed")?;

    if args.crop.json {
        let body = json!({
            "outcome": outcome,
            "continue_default": outcome.continue_default(),
            "soil": soil,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", outcome);
        println!(
            "host default {}; soil {}",
            if outcome.continue_default() {
                "runs"
            } else {
                "skipped"
            },
            soil.state
        );
    }

    Ok(())
}
