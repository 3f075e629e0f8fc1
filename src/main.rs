// This is the command line entry point for the thumbnail squarer.
// The lib.rs file holds the actual pipeline and batch driver.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use thumbnail_squarer_lib::{DEFAULT_DIR, resize_thumbnails};

/// Pads every `thumbnail_*` JPEG/WebP in a directory onto a centered square canvas.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directory holding the thumbnails; outputs are written next to them
    #[arg(default_value = DEFAULT_DIR)]
    dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)       // Remove module path
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    debug!("Squaring thumbnails in '{}'", cli.dir.display());

    // Silent on success at the default level; partial failure is reported, not
    // signalled through the exit status
    if let Err(e) = resize_thumbnails(&cli.dir) {
        error!("{e}");
    }

    Ok(())
}
