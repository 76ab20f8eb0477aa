// Writing the processed results as CSV files.

use serde::{Deserialize, Serialize};

use crate::etl::*;

/// One line of the output files.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct CsvRecord {
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Party_Name")]
    pub party_name: String,
    #[serde(rename = "Total_Votes")]
    pub total_votes: u64,
    #[serde(rename = "Total_Percent")]
    pub total_percent: f64,
}

impl From<&PartyResult> for CsvRecord {
    fn from(pr: &PartyResult) -> Self {
        CsvRecord {
            year: pr.year.value(),
            party_name: pr.party_name.clone(),
            total_votes: pr.total_votes,
            total_percent: pr.total_percent,
        }
    }
}

pub fn write_results(path: &Path, results: &[PartyResult]) -> EtlResult<()> {
    let p = path.display().to_string();
    let mut wtr = csv::Writer::from_path(path).context(WritingCsvSnafu { path: p.clone() })?;
    for pr in results.iter() {
        wtr.serialize(CsvRecord::from(pr))
            .context(WritingCsvSnafu { path: p.clone() })?;
    }
    wtr.flush().context(WritingFileSnafu { path: p })?;
    debug!("write_results: {} records to {:?}", results.len(), path);
    Ok(())
}

#[cfg(test)]
pub fn read_results(path: &Path) -> Vec<CsvRecord> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.deserialize::<CsvRecord>().map(|r| r.unwrap()).collect()
}
