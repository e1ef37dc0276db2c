//! Walk-through of the logger.
//!
//! ```text
//! $ cargo run -p pyx-demo
//! $ DEBUG_MODE=true cargo run -p pyx-demo
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use pyx_log::{log_values, setup_diagnostics, Logger, LoggerConfig, Mode};
use serde_json::json;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional logger settings file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// Name of the main logger, overrides the config file
    #[arg(short, long)]
    name: Option<String>,

    /// Start the main logger in silent mode
    #[arg(long)]
    silent: bool,

    /// Print without escape sequences
    #[arg(long)]
    no_ansi: bool,

    /// Directory for the crate's own diagnostics
    #[arg(long, default_value = "logs")]
    log_dir: String,
}

fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();
    let _guard = setup_diagnostics(&args.log_dir)?;

    let mut config = match &args.config {
        Some(path) => LoggerConfig::load(path)
            .with_context(|| format!("Failed to load logger config from {}", path))?,
        None => LoggerConfig::new("Me"),
    };
    if let Some(name) = args.name {
        config.name = name;
    }
    if args.silent {
        config.mode = Mode::Silent;
    }
    if args.no_ansi {
        config.ansi = false;
    }
    info!("Starting demo with logger '{}'", config.name);

    let me = Logger::from_config(&config);
    let mut world_config = LoggerConfig::new("World");
    world_config.ansi = config.ansi;
    world_config.debug_var = config.debug_var.clone();
    let world = Logger::from_config(&world_config);

    me.header("Initializing World Domination");
    me.log(["Worlds: 1"]);
    me.debug(log_values!["Is world worth dominating?", true]);
    world.header("Initializing World Domination Defence Measures");
    me.alert("WORLD IS RESISTING");
    me.header("Initializing Offencive Measures");

    me.be_silent();
    for _ in 0..100 {
        me.log(["FIRE!"]);
    }
    me.be_normal();

    me.log(log_values!["Damage report", json!({"cities": 3, "resisting": true})]);
    world.log(["..."]);
    world.debug(log_values!["Is world over?", "???", json!({"hope": null})]);

    Ok(())
}
