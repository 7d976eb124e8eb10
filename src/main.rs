use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use slateboard::config::{Config, is_valid_endpoint};
use slateboard::draw::CairoSurface;
use slateboard::export::{ExportManager, ExportOutcome};
use slateboard::{Whiteboard, script};

#[derive(Parser, Debug)]
#[command(name = "slateboard")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SLATEBOARD_GIT_HASH"), ")"),
    about = "Whiteboard drawing surface with PNG copy, download and submit"
)]
struct Cli {
    /// Config file to use instead of ~/.config/slateboard/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON-lines input script to replay onto the board
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Copy the resulting image to the clipboard
    #[arg(long, action = ArgAction::SetTrue)]
    copy: bool,

    /// Save the resulting image into the download directory
    #[arg(long, action = ArgAction::SetTrue)]
    download: bool,

    /// Override the download directory
    #[arg(long, value_name = "DIR")]
    download_dir: Option<PathBuf>,

    /// Submit the resulting image to the interpretation endpoint
    #[arg(long, action = ArgAction::SetTrue)]
    submit: bool,

    /// Override the submit endpoint
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Print the board state as JSON after replaying the script
    #[arg(long, action = ArgAction::SetTrue)]
    dump_state: bool,

    /// Write the example config to ~/.config/slateboard/config.toml and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Print the config file JSON Schema and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_schema: bool,
}

impl Cli {
    fn has_work(&self) -> bool {
        self.script.is_some() || self.copy || self.download || self.submit || self.dump_state
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.print_schema {
        println!("{}", Config::json_schema()?);
        return Ok(());
    }

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
        return Ok(());
    }

    if !cli.has_work() {
        println!("slateboard: Whiteboard drawing surface with PNG export");
        println!();
        println!("Usage:");
        println!("  slateboard --script events.jsonl --download   Replay input and save the image");
        println!("  slateboard --script events.jsonl --submit     Replay input and submit the image");
        println!("  slateboard --init-config                      Write the example config");
        println!("  slateboard --help                             Show help");
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut download = config.download_config();
    if let Some(dir) = &cli.download_dir {
        download.directory = dir.clone();
    }
    let mut submit = config.submit_config();
    if let Some(endpoint) = &cli.endpoint {
        if !is_valid_endpoint(endpoint) {
            return Err(anyhow::anyhow!(
                "Invalid endpoint '{}': expected an http or https URL",
                endpoint
            ));
        }
        submit.endpoint = endpoint.clone();
    }

    let palette = config.palette();
    let surface = CairoSurface::new(config.canvas.width, config.canvas.height, palette.background)
        .context("Failed to create drawing surface")?;
    let mut board = Whiteboard::with_settings(surface, config.style(), palette, config.font());

    if let Some(path) = &cli.script {
        let events = script::load_script(path)?;
        log::info!("Replaying {} events from {}", events.len(), path.display());
        script::apply_all(&mut board, &events);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let exports = ExportManager::new(runtime.handle())
        .with_download_config(download)
        .with_submit_config(submit);

    let mut pending = Vec::new();
    if cli.copy {
        pending.extend(exports.copy(&board));
    }
    if cli.download {
        pending.extend(exports.download(&board));
    }
    if cli.submit {
        pending.extend(exports.submit(&board));
    }
    for result in runtime.block_on(futures::future::join_all(pending)) {
        match result {
            Ok(ExportOutcome::Copied) => println!("Copied image to clipboard"),
            Ok(ExportOutcome::Saved(path)) => println!("Saved {}", path.display()),
            Ok(ExportOutcome::Submitted { status, body }) => {
                println!("Submitted image (HTTP {}): {}", status, body)
            }
            // Already logged by the export task
            Ok(ExportOutcome::Failed(_)) => {}
            Err(e) => log::error!("Export task panicked: {}", e),
        }
    }

    if cli.dump_state {
        println!("{}", serde_json::to_string_pretty(board.state())?);
    }

    Ok(())
}
