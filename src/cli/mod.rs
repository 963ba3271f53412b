// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2.
// Printing happens here and nowhere else.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, SourcesArgs, SplitArgs};

use crate::application::split_use_case::{SplitConfig, SplitUseCase};
use crate::domain::traits::SeriesSource;

#[derive(Parser, Debug)]
#[command(
    name = "tensile-split",
    version,
    about = "Cut tensile-test series into sliding windows with a leak-free held-out block per material."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args)   => run_split(args),
            Commands::Sources(args) => run_sources(args),
        }
    }
}

fn run_split(args: SplitArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            tracing::info!("Reading split settings from '{}'", path);
            SplitConfig::from_json_file(path)?
        }
        None => SplitConfig::from(&args),
    };

    let (_dataset, report) = SplitUseCase::new(config).execute()?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_table());
        if let Some(width) = report.feature_width {
            println!("\nWindow width: {} values", width);
        }
    }
    Ok(())
}

fn run_sources(args: SourcesArgs) -> Result<()> {
    let config = SplitConfig {
        data_dir:  args.data_dir,
        delimiter: args.delimiter,
        ..SplitConfig::default()
    };
    let loader = SplitUseCase::new(config).loader()?;

    println!("{:<20} {:>6} {:>6}", "class", "rows", "width");
    for name in loader.class_names()? {
        let series = loader.load(&name)?;
        println!("{:<20} {:>6} {:>6}", series.name, series.num_rows(), series.row_width());
    }
    Ok(())
}
