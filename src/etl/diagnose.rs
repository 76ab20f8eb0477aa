// Connectivity check: bucket listing, one download, one spreadsheet read.
// Not used by the extraction pipeline.

use crate::etl::io_s3::{download_object, http_client, list_bucket};
use crate::etl::*;

pub const SPREADSHEET_SUFFIX: &str = ".xls";

pub fn run_diagnostic(config: &EtlConfig, loader: &dyn SheetLoader) -> EtlResult<()> {
    println!("Bucket: {} ({})", config.bucket, config.region);
    let client = http_client()?;
    let keys = list_bucket(&client, config)?;
    let spreadsheets: Vec<&String> = keys
        .iter()
        .filter(|k| k.ends_with(SPREADSHEET_SUFFIX))
        .collect();
    println!("Found {} Excel files in the bucket:", spreadsheets.len());
    for k in spreadsheets.iter() {
        println!("  - {}", k);
    }

    let key = match spreadsheets.first() {
        Some(k) => k.as_str(),
        None => whatever!("No spreadsheet found in bucket {}", config.bucket),
    };
    let file_name = match Path::new(key).file_name() {
        Some(x) => x.to_owned(),
        None => whatever!("Cannot derive a file name from key {:?}", key),
    };

    fs::create_dir_all(&config.raw_data_dir).context(CreatingDirSnafu {
        path: config.raw_data_dir.display().to_string(),
    })?;
    let local_path = config.raw_data_dir.join(file_name);
    println!("Downloading test file: {}", key);
    let size = download_object(&client, config, key, &local_path)?;
    println!(
        "Downloaded: {} ({:.1} KB)",
        local_path.display(),
        size as f64 / 1024.0
    );

    let sheet = loader.load(&local_path)?;
    println!("Excel file loaded successfully");
    print!("{}", describe_sheet(&sheet, 5));
    Ok(())
}

/// A short text description of a sheet: shape, header and the first `head` rows.
pub fn describe_sheet(sheet: &RawSheet, head: usize) -> String {
    let mut s = String::new();
    s.push_str(&format!("Shape: ({}, {})\n", sheet.height(), sheet.width()));
    s.push_str(&format!("Columns: {}\n", sheet.width()));
    s.push_str(&format!("Header: {}\n", join_cells(sheet.columns())));
    for (idx, row) in sheet.rows().iter().take(head).enumerate() {
        s.push_str(&format!("Row {}: {}\n", idx, join_cells(row)));
    }
    s
}

fn join_cells(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<String>>()
        .join(" | ")
}
