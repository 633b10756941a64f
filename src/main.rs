use crate::config::Config;
use crate::display::{SortOrder, display_ranking, show_all_students};
use clap::{ArgAction, Parser};
use eyre::Result;
use std::path::PathBuf;
use tracing::Level;

mod config;
mod display;
mod error;
mod model;

#[derive(Parser)]
#[command(author, version, about)]
struct Options {
    /// Load groups and students from FILE instead of the demonstration roster
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Comparison used for ranking students
    #[arg(short, long, value_enum, default_value_t = SortOrder::Average)]
    sort: SortOrder,
    /// Expel students who did not pass the session before listing groups
    #[arg(long)]
    expel_failed: bool,
    /// Set verbosity level (repeat to increase)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = match &options.config {
        Some(file_name) => Config::load(file_name)?,
        None => Config::demo(),
    };
    let mut roster = config.build()?;
    display_ranking(&roster, options.sort)?;
    for group in roster.all_groups() {
        if options.expel_failed {
            roster.expel_all_failed_students(group)?;
        }
        println!();
        show_all_students(&roster, group)?;
    }
    Ok(())
}
