use crate::args::Args;
use crate::etl::*;

use serde::{Deserialize, Serialize};

pub const DEFAULT_RAW_DATA_DIR: &str = "data/raw";
pub const DEFAULT_PROCESSED_DATA_DIR: &str = "data/processed";
pub const DEFAULT_BUCKET: &str = "sa-political-prediction";
pub const DEFAULT_REGION: &str = "eu-west-1";

pub const COMBINED_FILE_NAME: &str = "all_elections_combined.csv";

/// The configuration file, as written by the user.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(rename = "rawDataDir")]
    pub raw_data_dir: Option<String>,
    #[serde(rename = "processedDataDir")]
    pub processed_data_dir: Option<String>,
    pub bucket: Option<String>,
    pub region: Option<String>,
    pub years: Option<Vec<u32>>,
}

/// The validated settings of a run.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct EtlConfig {
    pub raw_data_dir: PathBuf,
    pub processed_data_dir: PathBuf,
    pub bucket: String,
    pub region: String,
    /// Sorted, without duplicates.
    pub years: Vec<ElectionYear>,
}

impl Default for EtlConfig {
    fn default() -> Self {
        EtlConfig {
            raw_data_dir: PathBuf::from(DEFAULT_RAW_DATA_DIR),
            processed_data_dir: PathBuf::from(DEFAULT_PROCESSED_DATA_DIR),
            bucket: DEFAULT_BUCKET.to_string(),
            region: DEFAULT_REGION.to_string(),
            years: ElectionYear::ALL.to_vec(),
        }
    }
}

impl EtlConfig {
    pub fn raw_file_path(&self, year: ElectionYear) -> PathBuf {
        self.raw_data_dir.join(year.file_name())
    }

    pub fn processed_file_path(&self, year: ElectionYear) -> PathBuf {
        self.processed_data_dir
            .join(format!("election_{}_processed.csv", year))
    }

    pub fn combined_file_path(&self) -> PathBuf {
        self.processed_data_dir.join(COMBINED_FILE_NAME)
    }

    pub fn bucket_url(&self) -> String {
        format!("https://{}.s3.{}.amazonaws.com", self.bucket, self.region)
    }
}

pub fn read_config_file(path: &str) -> EtlResult<ConfigFile> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read config: {:?}", contents);
    serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})
}

fn validate_years(years: &[u32]) -> EtlResult<Vec<ElectionYear>> {
    let mut res: Vec<ElectionYear> = Vec::new();
    for y in years {
        res.push(ElectionYear::try_from(*y).context(InvalidYearSnafu {})?);
    }
    res.sort();
    res.dedup();
    Ok(res)
}

pub fn validate_config(cf: &ConfigFile) -> EtlResult<EtlConfig> {
    let default = EtlConfig::default();
    let years = match cf.years.as_deref() {
        Some([]) => whatever!("The list of years in the configuration is empty"),
        Some(ys) => validate_years(ys)?,
        None => default.years,
    };
    Ok(EtlConfig {
        raw_data_dir: cf
            .raw_data_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or(default.raw_data_dir),
        processed_data_dir: cf
            .processed_data_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or(default.processed_data_dir),
        bucket: cf.bucket.clone().unwrap_or(default.bucket),
        region: cf.region.clone().unwrap_or(default.region),
        years,
    })
}

/// Reads the configuration file (if any) and applies the command line flags on top of it.
pub fn build_config(args: &Args) -> EtlResult<EtlConfig> {
    let cf = match &args.config {
        Some(path) => {
            info!("Reading configuration {:?}", path);
            read_config_file(path)?
        }
        None => ConfigFile::default(),
    };
    let mut config = validate_config(&cf)?;
    if let Some(x) = &args.raw_dir {
        config.raw_data_dir = PathBuf::from(x);
    }
    if let Some(x) = &args.processed_dir {
        config.processed_data_dir = PathBuf::from(x);
    }
    if let Some(x) = &args.bucket {
        config.bucket = x.clone();
    }
    if let Some(x) = &args.region {
        config.region = x.clone();
    }
    if !args.year.is_empty() {
        config.years = validate_years(&args.year)?;
    }
    Ok(config)
}
