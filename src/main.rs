//! asset-prep - prepares vendored client assets before packaging.

mod asset;
mod cli;
mod config;
mod locale;
mod logger;
mod pipeline;
mod tasks;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::PrepConfig;
use pipeline::Pipeline;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let pipeline = Pipeline::standard();
    if cli.list {
        for name in pipeline.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = PrepConfig::load(&cli)?;
    match &config.config_path {
        Some(path) => debug!("config"; "loaded {}", path.display()),
        None => debug!("config"; "using defaults"),
    }
    debug!("config"; "root: {}", config.get_root().display());

    let report = match pipeline.run(&config) {
        Ok(report) => report,
        Err(e) => {
            log!("error"; "{:#}", e);
            std::process::exit(1);
        }
    };

    for (name, outcome) in report.entries() {
        debug!("done"; "{}: {:?}", name, outcome);
    }
    log!("done"; "{} done, {} skipped", report.done(), report.skipped());
    Ok(())
}
