//! hymnal - Hymnal browser command line
//!
//! Lists and searches the hymn catalog, manages tags and the history of
//! sung hymns. Data lives in one folder: `hymns.csv` (read-only catalog),
//! `tags.json` and `history.json`.

use anyhow::{Context, Result};
use clap::Parser;
use hymnal_cli::cli::{Args, Command};
use hymnal_cli::commands;
use hymnal_cli::logging::init_tracing;
use hymnal_cli::prompt::TerminalPrompter;
use hymnal_common::config::{resolve_data_dir, DataPaths, TomlConfig};
use hymnal_common::Session;
use tracing::{error, info};

fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read first so its log level can seed the subscriber
    let config = TomlConfig::load_or_default(args.config.as_deref());
    let level = args
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| "info".to_string());
    init_tracing(&level);
    let config = config.context("Failed to load configuration")?;

    info!(
        "Starting hymnal v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let data_dir = resolve_data_dir(args.data_dir.as_deref(), &config);
    let paths = DataPaths::in_dir(&data_dir, &config);
    info!("Data folder: {}", data_dir.display());

    if args.command == Command::Init {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create {}", data_dir.display()))?;
        let created = Session::init_documents(&paths)?;
        if created.is_empty() {
            println!("Tag and history documents already exist in {}", data_dir.display());
        }
        for path in created {
            println!("Created {}", path.display());
        }
        if !paths.catalog.exists() {
            println!("Place the hymn catalog at {}", paths.catalog.display());
        }
        return Ok(());
    }

    let mut session = match Session::open(&paths) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to load hymnal data: {}", e);
            return Err(e).with_context(|| format!("Cannot open hymnal data in {}", data_dir.display()));
        }
    };

    let mut prompter = TerminalPrompter::terminal();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(args.command, &mut session, &mut prompter, &mut out)
}
