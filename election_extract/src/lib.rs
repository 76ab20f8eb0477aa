/*!
Extraction of the national party results from the spreadsheets published
for the South African general elections (2009, 2014, 2019, 2024).

The spreadsheets are not meant to be read by a program: the table of parties
is preceded by titles and headers, followed by summary lines, and its
position changes between years. This crate locates the party rows with a few
heuristics tuned on the published files.

```
use election_extract::*;

let mut row = vec![Cell::Empty; 35];
row[1] = Cell::String("African National Congress".to_string());
row[33] = Cell::String("6,459,683".to_string());
row[34] = Cell::Float(40.18);
let sheet = RawSheet::new(vec![], vec![row]);

let ds = Extractor::default().extract(ElectionYear::Y2024, &sheet);
assert_eq!(ds.parties()[0].total_votes, 6_459_683);
```

There is no guarantee that the heuristics generalize beyond these four
files. In particular the historical vote column is the first value above
1000 found from the right edge of the row: a regional sub-total placed there
would be taken for the national total.
*/
mod config;
use log::{Level, Log, Record};

use std::fmt;
use std::ops::Range;

pub use crate::config::*;

/// Fallback for the first party row of the 2024 layout.
pub const DEFAULT_DATA_START_2024: usize = 5;
/// Column of the party names in the 2024 layout.
pub const NAME_COLUMN_2024: usize = 1;
/// Column of the national vote totals in the 2024 layout.
pub const VOTES_COLUMN_2024: usize = 33;
/// Column of the national percentages in the 2024 layout.
pub const PERCENT_COLUMN_2024: usize = 34;
/// Rows at or below this number of votes are noise in the 2024 layout.
pub const VOTE_FLOOR_2024: u64 = 100;

/// First row scanned in the historical layout.
pub const HISTORICAL_FIRST_ROW: usize = 10;
/// End (exclusive) of the rows scanned in the historical layout.
pub const HISTORICAL_LAST_ROW: usize = 100;
/// Number of leading cells that may hold a party name (historical layout).
pub const NAME_SCAN_WIDTH: usize = 5;
/// Bound of the trailing cells that may hold a vote total (historical layout).
///
/// The cell at `len - VOTE_SCAN_WIDTH` is excluded, and so is the first cell
/// of the row: the scan covers `VOTE_SCAN_WIDTH - 1` cells at most.
pub const VOTE_SCAN_WIDTH: usize = 10;
/// Vote totals must be strictly above this number (historical layout).
pub const VOTE_FLOOR_HISTORICAL: u64 = 1000;

/// Shortest accepted party name.
pub const MIN_NAME_LEN: usize = 3;

// Text found in the header lines.
const HEADER_TERMS: [&str; 4] = ["party", "votes", "total", "%"];
// Text found in the summary lines (total votes, spoilt ballots, ...).
const SUMMARY_TERMS: [&str; 4] = ["total", "spoilt", "spoiled", "valid"];

fn contains_any(text: &str, terms: &[&str]) -> bool {
    let lower = text.to_lowercase();
    terms.iter().any(|t| lower.contains(t))
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// True if the name designates a summary line rather than a party.
pub fn is_summary_name(name: &str) -> bool {
    contains_any(name, &SUMMARY_TERMS)
}

/// The first row whose name cell looks like a party name (2024 layout).
///
/// Headers are short in this layout, so any text longer than 5 characters
/// is taken as the start of the table.
pub fn find_data_start(sheet: &RawSheet) -> Option<usize> {
    sheet.rows().iter().position(|row| {
        cell_at(row, NAME_COLUMN_2024)
            .as_str()
            .map(|s| char_len(s.trim()) > 5)
            .unwrap_or(false)
    })
}

/// The first row that may contain a party.
pub fn locate_data_start(sheet: &RawSheet, format: SheetFormat) -> usize {
    match format {
        SheetFormat::Format2024 => find_data_start(sheet).unwrap_or(DEFAULT_DATA_START_2024),
        SheetFormat::Historical => HISTORICAL_FIRST_ROW,
    }
}

/// The rows that are evaluated for the given layout. May be empty.
pub fn data_window(sheet: &RawSheet, format: SheetFormat) -> Range<usize> {
    let start = locate_data_start(sheet, format);
    let end = match format {
        SheetFormat::Format2024 => sheet.height(),
        SheetFormat::Historical => sheet.height().min(HISTORICAL_LAST_ROW),
    };
    start.min(end)..end
}

/// Reads the party name of a row, if there is one.
pub fn extract_party_name(row: &[Cell], format: SheetFormat) -> Option<String> {
    match format {
        SheetFormat::Format2024 => {
            let name = cell_at(row, NAME_COLUMN_2024).as_str()?.trim();
            if char_len(name) >= MIN_NAME_LEN {
                Some(name.to_string())
            } else {
                None
            }
        }
        SheetFormat::Historical => row.iter().take(NAME_SCAN_WIDTH).find_map(|c| {
            let s = c.as_str()?;
            if char_len(s.trim()) > MIN_NAME_LEN && !contains_any(s, &HEADER_TERMS) {
                Some(s.trim().to_string())
            } else {
                None
            }
        }),
    }
}

/// Reads the vote total of a row.
///
/// Returns `None` when the row does not hold a total above the floor of the
/// layout. Fractional vote counts are truncated before the comparison.
pub fn extract_vote_total(row: &[Cell], format: SheetFormat) -> Option<VoteTotal> {
    match format {
        SheetFormat::Format2024 => {
            let votes = cell_at(row, VOTES_COLUMN_2024)
                .as_number()
                .unwrap_or(0.0)
                .trunc();
            let percent = cell_at(row, PERCENT_COLUMN_2024)
                .as_number()
                .unwrap_or(0.0);
            if votes > VOTE_FLOOR_2024 as f64 {
                Some(VoteTotal {
                    votes: votes as u64,
                    percent: Some(percent),
                })
            } else {
                None
            }
        }
        SheetFormat::Historical => {
            let lower = (row.len().saturating_sub(VOTE_SCAN_WIDTH) + 1).min(row.len());
            row[lower..]
                .iter()
                .rev()
                .filter_map(Cell::as_number)
                .map(f64::trunc)
                .find(|v| *v > VOTE_FLOOR_HISTORICAL as f64)
                .map(|v| VoteTotal {
                    votes: v as u64,
                    percent: None,
                })
        }
    }
}

/// Extracts the parties from a sheet in the 2024 layout.
pub fn extract_2024(year: ElectionYear, sheet: &RawSheet) -> Vec<PartyResult> {
    let format = SheetFormat::Format2024;
    let mut res: Vec<PartyResult> = Vec::new();
    for row in sheet.rows()[data_window(sheet, format)].iter() {
        let party_name = match extract_party_name(row, format) {
            Some(x) if !is_summary_name(&x) => x,
            _ => continue,
        };
        if let Some(vt) = extract_vote_total(row, format) {
            res.push(PartyResult {
                year,
                party_name,
                total_votes: vt.votes,
                total_percent: vt.percent.unwrap_or(0.0),
            });
        }
    }
    res
}

/// Extracts the parties from a sheet in the historical layout.
///
/// The percentages are the shares of the sum of the retained rows.
pub fn extract_historical(year: ElectionYear, sheet: &RawSheet) -> Vec<PartyResult> {
    let format = SheetFormat::Historical;
    let mut counts: Vec<(String, u64)> = Vec::new();
    for row in sheet.rows()[data_window(sheet, format)].iter() {
        let party_name = match extract_party_name(row, format) {
            Some(x) => x,
            None => continue,
        };
        let vt = match extract_vote_total(row, format) {
            Some(x) => x,
            None => continue,
        };
        if !is_summary_name(&party_name) {
            counts.push((party_name, vt.votes));
        }
    }
    derive_percentages(year, counts)
}

/// Turns raw counts into results, the percentage being the share of the total.
pub fn derive_percentages(year: ElectionYear, counts: Vec<(String, u64)>) -> Vec<PartyResult> {
    let total: u64 = counts.iter().fold(0, |acc, (_, c)| acc.saturating_add(*c));
    counts
        .into_iter()
        .map(|(party_name, total_votes)| PartyResult {
            year,
            party_name,
            total_votes,
            total_percent: if total > 0 {
                (total_votes as f64) / (total as f64) * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Runs the extraction strategy that matches the layout of a given year.
///
/// The extractor does not fail: rows that cannot be understood are skipped
/// and the number of retained rows is reported to the logger.
pub struct Extractor<'a> {
    logger: &'a dyn Log,
}

impl Default for Extractor<'static> {
    /// Reports to the logger installed for the process.
    fn default() -> Self {
        Extractor {
            logger: log::logger(),
        }
    }
}

impl<'a> Extractor<'a> {
    pub fn with_logger(logger: &'a dyn Log) -> Extractor<'a> {
        Extractor { logger }
    }

    fn emit(&self, level: Level, args: fmt::Arguments) {
        let record = Record::builder()
            .args(args)
            .level(level)
            .target(module_path!())
            .module_path(Some(module_path!()))
            .file(Some(file!()))
            .build();
        if self.logger.enabled(record.metadata()) {
            self.logger.log(&record);
        }
    }

    pub fn extract(&self, year: ElectionYear, sheet: &RawSheet) -> ElectionDataset {
        let format = year.format();
        let window = data_window(sheet, format);
        self.emit(
            Level::Debug,
            format_args!(
                "extract: {}: layout {:?}, sheet {}x{}, scanning rows {:?}",
                year,
                format,
                sheet.height(),
                sheet.width(),
                window
            ),
        );
        let parties = match format {
            SheetFormat::Format2024 => extract_2024(year, sheet),
            SheetFormat::Historical => extract_historical(year, sheet),
        };
        self.emit(
            Level::Info,
            format_args!("{}: Extracted {} parties", year, parties.len()),
        );
        ElectionDataset::new(year, parties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn s(x: &str) -> Cell {
        Cell::String(x.to_string())
    }

    fn row_2024(name: &str, votes: Cell, percent: Cell) -> Vec<Cell> {
        let mut row = vec![Cell::Empty; 35];
        row[0] = Cell::Int(1);
        row[1] = s(name);
        // Provincial breakdown, ignored.
        for c in row.iter_mut().take(33).skip(2) {
            *c = Cell::Float(12.0);
        }
        row[VOTES_COLUMN_2024] = votes;
        row[PERCENT_COLUMN_2024] = percent;
        row
    }

    fn sheet_2024(rows: Vec<Vec<Cell>>) -> RawSheet {
        let mut all = vec![
            vec![s("Ballot"), s("Name")],
            vec![Cell::Empty, s("NPE")],
        ];
        all.extend(rows);
        RawSheet::new(vec![s("National results")], all)
    }

    fn row_hist(name: &str, votes: Cell) -> Vec<Cell> {
        let mut row = vec![Cell::Empty; 12];
        row[0] = s(name);
        row[2] = Cell::Int(7);
        row[9] = Cell::Float(350.0);
        row[10] = votes;
        row[11] = Cell::Float(0.0);
        row
    }

    fn sheet_hist(rows: Vec<Vec<Cell>>) -> RawSheet {
        let mut all: Vec<Vec<Cell>> = (0..HISTORICAL_FIRST_ROW)
            .map(|i| {
                let mut row = vec![Cell::Empty; 12];
                row[0] = s("Electoral Commission of South Africa");
                row[11] = Cell::Int(50_000 + i as i64);
                row
            })
            .collect();
        let mut header = vec![s("Party Name")];
        header.resize(11, Cell::Empty);
        header.push(s("Total Votes"));
        all.push(header);
        all.extend(rows);
        RawSheet::new(vec![], all)
    }

    fn names(ds: &ElectionDataset) -> Vec<String> {
        ds.parties().iter().map(|p| p.party_name.clone()).collect()
    }

    #[test]
    fn cell_numbers() {
        assert_eq!(s("1,234,567").as_number(), Some(1_234_567.0));
        assert_eq!(s(" 35.5 ").as_number(), Some(35.5));
        assert_eq!(Cell::Int(12).as_number(), Some(12.0));
        assert_eq!(s("ANC").as_number(), None);
        assert_eq!(s("inf").as_number(), None);
        assert_eq!(Cell::Bool(true).as_number(), None);
        assert_eq!(Cell::Empty.as_number(), None);
    }

    #[test]
    fn sheet_is_rectangular() {
        let sheet = RawSheet::from_grid(vec![vec![s("a")], vec![s("b"), s("c"), s("d")], vec![]]);
        assert_eq!(sheet.width(), 3);
        assert_eq!(sheet.height(), 2);
        assert!(sheet.rows().iter().all(|r| r.len() == 3));
        assert_eq!(sheet.columns()[0], s("a"));
    }

    #[test]
    fn years() {
        assert_eq!(ElectionYear::try_from(2019), Ok(ElectionYear::Y2019));
        assert_eq!("2024".parse::<ElectionYear>(), Ok(ElectionYear::Y2024));
        assert!(ElectionYear::try_from(2004).is_err());
        assert!("abc".parse::<ElectionYear>().is_err());
        assert_eq!(ElectionYear::Y2009.file_name(), "National_2009.xls");
        assert_eq!(ElectionYear::Y2024.format(), SheetFormat::Format2024);
        assert_eq!(ElectionYear::Y2014.format(), SheetFormat::Historical);
    }

    #[test]
    fn data_start_2024() {
        let sheet = sheet_2024(vec![row_2024("Democratic Alliance", Cell::Int(10), Cell::Int(1))]);
        assert_eq!(find_data_start(&sheet), Some(2));
        assert_eq!(locate_data_start(&sheet, SheetFormat::Format2024), 2);
    }

    #[test]
    fn data_start_2024_fallback() {
        let rows: Vec<Vec<Cell>> = (0..8)
            .map(|i| row_2024("EFF", Cell::Int(10_000 + i), Cell::Float(1.0)))
            .collect();
        let sheet = RawSheet::new(vec![], rows);
        assert_eq!(find_data_start(&sheet), None);
        assert_eq!(
            locate_data_start(&sheet, SheetFormat::Format2024),
            DEFAULT_DATA_START_2024
        );
        let ds = Extractor::default().extract(ElectionYear::Y2024, &sheet);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.parties()[0].total_votes, 10_005);
    }

    #[test]
    fn party_2024_exact_values() {
        let row = row_2024("Party X", s("50,000"), Cell::Float(35.5));
        assert_eq!(
            extract_party_name(&row, SheetFormat::Format2024),
            Some("Party X".to_string())
        );
        assert_eq!(
            extract_vote_total(&row, SheetFormat::Format2024),
            Some(VoteTotal {
                votes: 50_000,
                percent: Some(35.5)
            })
        );

        let sheet = sheet_2024(vec![row]);
        let ds = Extractor::default().extract(ElectionYear::Y2024, &sheet);
        assert_eq!(
            ds.parties(),
            &[PartyResult {
                year: ElectionYear::Y2024,
                party_name: "Party X".to_string(),
                total_votes: 50_000,
                total_percent: 35.5,
            }]
        );
    }

    #[test]
    fn party_name_2024() {
        let f = SheetFormat::Format2024;
        assert_eq!(
            extract_party_name(&row_2024("  ANC  ", Cell::Empty, Cell::Empty), f),
            Some("ANC".to_string())
        );
        assert_eq!(extract_party_name(&row_2024(" DA ", Cell::Empty, Cell::Empty), f), None);
        assert_eq!(extract_party_name(&row_2024("", Cell::Empty, Cell::Empty), f), None);
        let mut row = row_2024("x", Cell::Empty, Cell::Empty);
        row[1] = Cell::Float(12345.0);
        assert_eq!(extract_party_name(&row, f), None);
        assert_eq!(extract_party_name(&[], f), None);
    }

    #[test]
    fn vote_floor_2024() {
        let f = SheetFormat::Format2024;
        assert_eq!(extract_vote_total(&row_2024("Party A", s("100"), s("0.1")), f), None);
        assert_eq!(
            extract_vote_total(&row_2024("Party A", Cell::Float(100.9), s("0.1")), f),
            None
        );
        assert_eq!(
            extract_vote_total(&row_2024("Party A", s("101"), s("n/a")), f),
            Some(VoteTotal {
                votes: 101,
                percent: Some(0.0)
            })
        );
        // Short row: no totals at all.
        assert_eq!(extract_vote_total(&[Cell::Empty, s("Party A")], f), None);
    }

    #[test]
    fn summary_rows_2024() {
        let sheet = sheet_2024(vec![
            row_2024("African National Congress", s("6,459,683"), Cell::Float(40.18)),
            row_2024("Democratic Alliance", s("3,505,735"), Cell::Float(21.81)),
            row_2024("Total Valid Votes", s("16,076,720"), Cell::Float(100.0)),
            row_2024("Spoilt Votes", s("213,093"), Cell::Empty),
            row_2024("Tiny Party", s("99"), Cell::Float(0.0)),
        ]);
        let ds = Extractor::default().extract(ElectionYear::Y2024, &sheet);
        assert_eq!(
            names(&ds),
            vec!["African National Congress", "Democratic Alliance"]
        );
        assert!(ds.parties().iter().all(|p| p.total_votes > VOTE_FLOOR_2024));
    }

    #[test]
    fn historical_percentages() {
        let sheet = sheet_hist(vec![
            row_hist("Alpha Movement", Cell::Int(6000)),
            row_hist("Beta Front", Cell::Float(4000.0)),
            row_hist("Total", Cell::Int(10_000)),
        ]);
        let ds = Extractor::default().extract(ElectionYear::Y2019, &sheet);
        assert_eq!(names(&ds), vec!["Alpha Movement", "Beta Front"]);
        let pcts: Vec<f64> = ds.parties().iter().map(|p| p.total_percent).collect();
        assert!((pcts[0] - 60.0).abs() < 1e-9);
        assert!((pcts[1] - 40.0).abs() < 1e-9);
    }

    #[test]
    fn historical_percentages_sum_to_100() {
        let rows: Vec<Vec<Cell>> = [
            ("African National Congress", 11_650_748),
            ("Congress of the People", 1_311_027),
            ("Democratic Alliance", 2_945_829),
            ("Inkatha Freedom Party", 804_260),
            ("Valid Votes", 17_680_729),
            ("Spoiled Votes", 239_237),
            ("African Christian Democratic Party", 142_658),
        ]
        .iter()
        .map(|(n, v)| row_hist(n, s(&format!("{}", v))))
        .collect();
        let ds = Extractor::default().extract(ElectionYear::Y2009, &sheet_hist(rows));
        // Names containing "party" are taken for headers.
        assert_eq!(
            names(&ds),
            vec![
                "African National Congress",
                "Congress of the People",
                "Democratic Alliance"
            ]
        );
        let sum: f64 = ds.parties().iter().map(|p| p.total_percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!(ds.parties().iter().all(|p| !is_summary_name(&p.party_name)));
    }

    #[test]
    fn historical_name_scan() {
        let f = SheetFormat::Historical;
        let mut row = vec![Cell::Empty; 12];
        row[0] = Cell::Int(3);
        row[1] = s("ANC");
        row[2] = s("Freedom Front Plus");
        assert_eq!(extract_party_name(&row, f), Some("Freedom Front Plus".to_string()));

        // Header-like text is skipped.
        row[2] = s("PARTY NAME");
        row[3] = s("Pan Africanist Congress");
        assert_eq!(
            extract_party_name(&row, f),
            Some("Pan Africanist Congress".to_string())
        );

        // Only the first five cells are considered.
        let mut row = vec![Cell::Empty; 12];
        row[5] = s("United Democratic Movement");
        assert_eq!(extract_party_name(&row, f), None);
    }

    #[test]
    fn historical_vote_scan() {
        let f = SheetFormat::Historical;
        // Rightmost large value wins, small trailing values are skipped.
        let mut row = row_hist("Minority Front", Cell::Int(43_474));
        row[8] = Cell::Int(99_999);
        assert_eq!(
            extract_vote_total(&row, f),
            Some(VoteTotal {
                votes: 43_474,
                percent: None
            })
        );

        // Only the last nine cells are scanned.
        let mut row = vec![Cell::Empty; 15];
        row[0] = s("Azanian People's Organisation");
        row[5] = Cell::Int(38_245);
        row[14] = Cell::Int(1000);
        assert_eq!(extract_vote_total(&row, f), None);

        row[6] = s("38,245");
        assert_eq!(extract_vote_total(&row, f).map(|v| v.votes), Some(38_245));

        let mut row = vec![Cell::Empty; 12];
        row[2] = Cell::Int(5000);
        assert_eq!(extract_vote_total(&row, f), None);
        row[3] = Cell::Int(5000);
        assert_eq!(extract_vote_total(&row, f).map(|v| v.votes), Some(5000));

        // The first cell is never a total, even on short rows.
        assert_eq!(extract_vote_total(&[Cell::Int(5000), Cell::Empty], f), None);
        assert_eq!(extract_vote_total(&[], f), None);
    }

    #[test]
    fn huge_vote_counts() {
        let sheet = sheet_hist(vec![
            row_hist("Alpha Movement", Cell::Float(1e20)),
            row_hist("Beta Front", Cell::Float(1e20)),
        ]);
        let ds = Extractor::default().extract(ElectionYear::Y2019, &sheet);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.total_votes(), u64::MAX);
        assert!(ds
            .parties()
            .iter()
            .all(|p| p.total_percent.is_finite() && p.total_percent <= 100.0));
    }

    #[test]
    fn historical_window() {
        let rows: Vec<Vec<Cell>> = (0..120)
            .map(|i| row_hist(&format!("Movement number {}", i), Cell::Int(2000)))
            .collect();
        let sheet = RawSheet::new(vec![], rows);
        assert_eq!(data_window(&sheet, SheetFormat::Historical), 10..100);
        let ds = Extractor::default().extract(ElectionYear::Y2014, &sheet);
        assert_eq!(ds.len(), 90);
        assert_eq!(ds.parties()[0].party_name, "Movement number 10");
        assert!(ds.parties().iter().all(|p| p.total_votes > VOTE_FLOOR_HISTORICAL));

        let short = RawSheet::new(vec![], rows_prefix(5));
        assert!(data_window(&short, SheetFormat::Historical).is_empty());
        assert!(Extractor::default()
            .extract(ElectionYear::Y2009, &short)
            .is_empty());
    }

    fn rows_prefix(n: usize) -> Vec<Vec<Cell>> {
        (0..n).map(|_| row_hist("Some Party", Cell::Int(5000))).collect()
    }

    #[test]
    fn top_parties() {
        let ds = ElectionDataset::new(
            ElectionYear::Y2009,
            derive_percentages(
                ElectionYear::Y2009,
                vec![
                    ("Small".to_string(), 10),
                    ("Large".to_string(), 1000),
                    ("Medium".to_string(), 100),
                    ("Medium bis".to_string(), 100),
                ],
            ),
        );
        let top: Vec<&str> = ds.top(3).iter().map(|p| p.party_name.as_str()).collect();
        assert_eq!(top, vec!["Large", "Medium", "Medium bis"]);
        assert_eq!(ds.total_votes(), 1210);
    }

    #[test]
    fn combined_dataset_order() {
        let make = |y: ElectionYear, n: &str| {
            ElectionDataset::new(y, derive_percentages(y, vec![(n.to_string(), 5000)]))
        };
        let combined = CombinedDataset::new(&[
            make(ElectionYear::Y2024, "D"),
            make(ElectionYear::Y2009, "A"),
            make(ElectionYear::Y2019, "C"),
        ]);
        assert_eq!(
            combined.years(),
            vec![ElectionYear::Y2009, ElectionYear::Y2019, ElectionYear::Y2024]
        );
        assert_eq!(combined.records()[0].party_name, "A");
        assert_eq!(combined.records()[0].total_percent, 100.0);
    }

    #[derive(Default)]
    struct CaptureLog {
        lines: Mutex<Vec<(Level, String)>>,
    }

    impl Log for CaptureLog {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= Level::Info
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                self.lines
                    .lock()
                    .unwrap()
                    .push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    #[test]
    fn injected_logger() {
        let capture = CaptureLog::default();
        let sheet = sheet_hist(vec![row_hist("Alpha Movement", Cell::Int(6000))]);
        let ds = Extractor::with_logger(&capture).extract(ElectionYear::Y2014, &sheet);
        assert_eq!(ds.len(), 1);
        let lines = capture.lines.lock().unwrap();
        assert_eq!(
            *lines,
            vec![(Level::Info, "2014: Extracted 1 parties".to_string())]
        );
    }
}
