//! lessontable CLI — builds a CSV table of lesson overviews.
//!
//! Reads the lessons section of a day's index document, extracts the title,
//! questions and objectives from each listed lesson, and writes `<day>.csv`.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
