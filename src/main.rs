use clap::Parser;
use itinerary::core::clock::SystemClock;
use itinerary::core::config;
use itinerary::core::{Gesture, ItemStore, ListId, reconcile};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "itinerary", about = "Drag cards between a travel timeline and a pool of places")]
struct Args {
    /// Config file (defaults to ~/.itinerary/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// TOML seed file with the starting timeline and pool
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Log level written to itinerary.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,

    /// Apply a gesture without the TUI, e.g. `pool/0>timeline/1` (repeatable)
    #[arg(short, long = "apply", value_name = "GESTURE")]
    apply: Vec<Gesture>,

    /// Print the headless result as JSON
    #[arg(long, requires = "apply")]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to itinerary.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("itinerary.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("itinerary: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&file_config, args.seed.as_deref());
    let store = match config::initial_store(&resolved) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("itinerary: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Itinerary starting with {} timeline and {} pool items",
        store.timeline.len(),
        store.pool.len()
    );

    if !args.apply.is_empty() {
        return run_headless(store, &args.apply, args.json);
    }

    match itinerary::tui::run(&resolved, store) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("itinerary: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Apply gestures in order and print the final store.
fn run_headless(mut store: ItemStore, gestures: &[Gesture], json: bool) -> ExitCode {
    for gesture in gestures {
        match reconcile(&store, gesture, &SystemClock) {
            Ok(next) => {
                log::info!("Applied {}", gesture);
                store = next;
            }
            Err(e) => {
                log::warn!("Rejected {}: {}", gesture, e);
                eprintln!("itinerary: {gesture}: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if json {
        match serde_json::to_string_pretty(&store) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("itinerary: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_listing(&store);
    }
    ExitCode::SUCCESS
}

fn print_listing(store: &ItemStore) {
    for list in [ListId::Timeline, ListId::Pool] {
        println!("{list}:");
        for (i, item) in store.list(list).iter().enumerate() {
            match &item.date {
                Some(date) => println!("  {i}. [{}] {} ({date})", item.id, item.title),
                None => println!("  {i}. [{}] {}", item.id, item.title),
            }
        }
    }
}
