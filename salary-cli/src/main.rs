use clap::Parser;
use tracing::debug;

use salary_cli::{app, cli::Cli, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_default_logging(cli.log_level.as_deref())?;
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    debug!(command = ?cli.command, "starting");
    let output = app::run(&cli.command)?;
    println!("{output}");

    Ok(())
}
