// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands:
//   `split`   — run the windowed train/test split and report it
//   `sources` — list the classes the loader would feed the split

use clap::{Args, Subcommand};
use crate::application::split_use_case::SplitConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split every class into train/test sliding windows
    Split(SplitArgs),

    /// List class sources with their row counts
    Sources(SourcesArgs),
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Directory holding one <class>.csv file per material
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Fraction of each series reserved as one contiguous test block
    #[arg(long, default_value_t = 0.1)]
    pub test_split: f64,

    /// Number of consecutive rows flattened into one window
    #[arg(long, default_value_t = 3)]
    pub interval: usize,

    /// Seed for the generator that places each test block
    #[arg(long, default_value_t = 11)]
    pub seed: u64,

    /// Field separator inside the CSV files
    #[arg(long, default_value_t = ';')]
    pub delimiter: char,

    /// Log running window counts for every class
    #[arg(long, short)]
    pub verbose: bool,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Read all split settings from a JSON file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,
}

impl From<&SplitArgs> for SplitConfig {
    fn from(a: &SplitArgs) -> Self {
        SplitConfig {
            data_dir:   a.data_dir.clone(),
            test_split: a.test_split,
            interval:   a.interval,
            seed:       a.seed,
            delimiter:  a.delimiter,
            verbose:    a.verbose,
        }
    }
}

#[derive(Args, Debug)]
pub struct SourcesArgs {
    /// Directory holding one <class>.csv file per material
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Field separator inside the CSV files
    #[arg(long, default_value_t = ';')]
    pub delimiter: char,
}
