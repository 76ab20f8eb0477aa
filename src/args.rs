use clap::{Parser, Subcommand};

/// Extraction of the South African national election results from the published spreadsheets.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file with the locations of the data and of the bucket.
    /// The other flags override the values of this file.
    #[clap(short, long, value_parser, global = true)]
    pub config: Option<String>,

    /// (directory, default data/raw) Where the raw spreadsheets are stored.
    #[clap(long, value_parser, global = true)]
    pub raw_dir: Option<String>,

    /// (directory, default data/processed) Where the CSV files are written.
    #[clap(long, value_parser, global = true)]
    pub processed_dir: Option<String>,

    /// (default sa-political-prediction) The name of the bucket holding the raw spreadsheets.
    #[clap(long, value_parser, global = true)]
    pub bucket: Option<String>,

    /// (default eu-west-1) The region of the bucket.
    #[clap(long, value_parser, global = true)]
    pub region: Option<String>,

    /// (repeatable, default all) Restricts the run to the given election years.
    #[clap(long, value_parser, global = true)]
    pub year: Vec<u32>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// (default) Extracts the party results of every available spreadsheet and writes the CSV files.
    Process,
    /// Downloads the spreadsheets of the configured years from the bucket.
    Download,
    /// Lists the bucket, downloads one spreadsheet and prints its first rows.
    Diagnose,
}
