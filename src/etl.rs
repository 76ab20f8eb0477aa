use log::{debug, error, info, warn};

use election_extract::*;
use snafu::{prelude::*, Snafu};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub use crate::etl::config_reader::*;
use crate::etl::io_csv::write_results;

pub mod config_reader;
pub mod diagnose;
pub mod io_csv;
pub mod io_s3;
pub mod io_xls;

#[derive(Debug, Snafu)]
pub enum EtlError {
    #[snafu(display("Error opening spreadsheet {path}"))]
    OpeningExcel {
        source: calamine::XlsError,
        path: String,
    },
    #[snafu(display("Spreadsheet {path} has no worksheet"))]
    EmptyExcel { path: String },
    #[snafu(display("File not found: {path}"))]
    MissingFile { path: String },
    #[snafu(display("Error creating directory {path}"))]
    CreatingDir {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing {path}"))]
    WritingCsv { source: csv::Error, path: String },
    #[snafu(display("Error writing {path}"))]
    WritingFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error reading configuration {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing configuration"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Invalid year in configuration"))]
    InvalidYear { source: ExtractionErrors },
    #[snafu(display("Error fetching {url}"))]
    Http { source: reqwest::Error, url: String },
    #[snafu(display("Status {status} when fetching {url}"))]
    HttpStatus { status: u16, url: String },
    #[snafu(display("Error parsing the bucket listing"))]
    ParsingXml { source: quick_xml::Error },
    #[snafu(display("Error decoding the bucket listing"))]
    DecodingXml {
        source: quick_xml::encoding::EncodingError,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type EtlResult<T> = Result<T, EtlError>;

/// The error and all its causes, on one line.
pub fn describe_error(e: &dyn std::error::Error) -> String {
    let mut s = e.to_string();
    let mut cur = e.source();
    while let Some(cause) = cur {
        s.push_str(": ");
        s.push_str(&cause.to_string());
        cur = cause.source();
    }
    s
}

/// Decodes a raw spreadsheet file.
pub trait SheetLoader {
    fn load(&self, path: &Path) -> EtlResult<RawSheet>;
}

/// Whether the raw file of each year is present.
pub type AvailabilityMap = BTreeMap<ElectionYear, bool>;

pub fn check_data_availability(config: &EtlConfig) -> AvailabilityMap {
    info!("Checking data file availability...");
    let mut res = AvailabilityMap::new();
    for year in config.years.iter() {
        let path = config.raw_file_path(*year);
        let available = match fs::metadata(&path) {
            Ok(m) if m.is_file() => {
                info!(
                    "{}: {} ({:.1} KB)",
                    year,
                    year.file_name(),
                    m.len() as f64 / 1024.0
                );
                true
            }
            _ => {
                warn!("{}: {} - NOT FOUND", year, year.file_name());
                false
            }
        };
        res.insert(*year, available);
    }
    res
}

pub fn process_year(
    config: &EtlConfig,
    loader: &dyn SheetLoader,
    extractor: &Extractor,
    year: ElectionYear,
) -> EtlResult<ElectionDataset> {
    let path = config.raw_file_path(year);
    ensure!(
        path.is_file(),
        MissingFileSnafu {
            path: path.display().to_string()
        }
    );
    info!("Processing {} election data...", year);
    let sheet = loader.load(&path)?;
    Ok(extractor.extract(year, &sheet))
}

fn top_parties_summary(ds: &ElectionDataset) -> String {
    ds.top(3)
        .iter()
        .map(|p| format!("{} ({:.1}%)", p.party_name, p.total_percent))
        .collect::<Vec<String>>()
        .join(", ")
}

/// What a run of the pipeline produced.
#[derive(Debug)]
pub struct PipelineReport {
    pub availability: AvailabilityMap,
    /// By ascending year. Years that failed or produced nothing are absent.
    pub datasets: Vec<ElectionDataset>,
    pub outputs: Vec<PathBuf>,
    pub combined: Option<PathBuf>,
}

/// Extracts every available year, writes one CSV per year and the combined CSV.
///
/// A year that cannot be read is reported and skipped. Only the failure to
/// write the outputs stops the run.
pub fn run_pipeline(
    config: &EtlConfig,
    loader: &dyn SheetLoader,
    extractor: &Extractor,
) -> EtlResult<PipelineReport> {
    info!("Processing all election data...");
    fs::create_dir_all(&config.processed_data_dir).context(CreatingDirSnafu {
        path: config.processed_data_dir.display().to_string(),
    })?;

    let availability = check_data_availability(config);
    let mut datasets: Vec<ElectionDataset> = Vec::new();
    let mut outputs: Vec<PathBuf> = Vec::new();
    for (year, available) in availability.iter() {
        if !available {
            continue;
        }
        let ds = match process_year(config, loader, extractor, *year) {
            Ok(ds) => ds,
            Err(e) => {
                error!("Error processing {} data: {}", year, describe_error(&e));
                continue;
            }
        };
        if ds.is_empty() {
            warn!("{}: no party found, nothing written", year);
            continue;
        }
        let out = config.processed_file_path(*year);
        write_results(&out, ds.parties())?;
        info!("Saved: {}", out.display());
        info!("{} Top 3: {}", year, top_parties_summary(&ds));
        outputs.push(out);
        datasets.push(ds);
    }

    let combined = if datasets.is_empty() {
        warn!("No election could be processed");
        None
    } else {
        let all = CombinedDataset::new(&datasets);
        let out = config.combined_file_path();
        write_results(&out, all.records())?;
        info!("Saved combined data: {}", out.display());
        debug!("combined years: {:?}", all.years());
        Some(out)
    };

    Ok(PipelineReport {
        availability,
        datasets,
        outputs,
        combined,
    })
}
