// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;

/// The content of a single spreadsheet cell.
///
/// Only the distinctions that matter to the extraction heuristics are kept:
/// dates, formula errors and other exotic cells are expected to be mapped to
/// `Empty` by the reader.
#[derive(PartialEq, Debug, Clone)]
pub enum Cell {
    Empty,
    String(String),
    Float(f64),
    Int(i64),
    Bool(bool),
}

static EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    /// Numeric view of the cell.
    ///
    /// Strings are accepted when they hold a number, possibly with thousands
    /// separators ("1,234,567"). Booleans and non-finite values are not numbers.
    pub fn as_number(&self) -> Option<f64> {
        let x = match self {
            Cell::Float(f) => *f,
            Cell::Int(i) => *i as f64,
            Cell::String(s) => s.replace(',', "").trim().parse::<f64>().ok()?,
            Cell::Empty | Cell::Bool(_) => return None,
        };
        if x.is_finite() {
            Some(x)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::String(s) => write!(f, "{}", s),
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Returns the cell at the given column, or an empty cell if the row is too short.
pub fn cell_at(row: &[Cell], col: usize) -> &Cell {
    row.get(col).unwrap_or(&EMPTY_CELL)
}

/// A worksheet as loaded in memory.
///
/// The first line of the worksheet is kept apart as the header. Row indices
/// are counted from the first line after the header, column indices from the
/// first column of the worksheet.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct RawSheet {
    columns: Vec<Cell>,
    rows: Vec<Vec<Cell>>,
}

impl RawSheet {
    /// Builds a sheet. Rows shorter than the widest row (or the header) are
    /// padded with empty cells so that the grid is rectangular.
    pub fn new(columns: Vec<Cell>, rows: Vec<Vec<Cell>>) -> RawSheet {
        let width = rows
            .iter()
            .map(|r| r.len())
            .chain(std::iter::once(columns.len()))
            .max()
            .unwrap_or(0);
        let pad = |mut r: Vec<Cell>| {
            r.resize(width, Cell::Empty);
            r
        };
        RawSheet {
            columns: pad(columns),
            rows: rows.into_iter().map(pad).collect(),
        }
    }

    /// Splits a full grid: the first line becomes the header.
    pub fn from_grid(grid: Vec<Vec<Cell>>) -> RawSheet {
        let mut iter = grid.into_iter();
        let columns = iter.next().unwrap_or_default();
        RawSheet::new(columns, iter.collect())
    }

    pub fn columns(&self) -> &[Cell] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

/// The national elections covered by this crate.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum ElectionYear {
    Y2009,
    Y2014,
    Y2019,
    Y2024,
}

impl ElectionYear {
    /// All the years, in ascending order.
    pub const ALL: [ElectionYear; 4] = [
        ElectionYear::Y2009,
        ElectionYear::Y2014,
        ElectionYear::Y2019,
        ElectionYear::Y2024,
    ];

    pub fn value(self) -> u32 {
        match self {
            ElectionYear::Y2009 => 2009,
            ElectionYear::Y2014 => 2014,
            ElectionYear::Y2019 => 2019,
            ElectionYear::Y2024 => 2024,
        }
    }

    /// The name of the source spreadsheet published for this year.
    pub fn file_name(self) -> String {
        format!("National_{}.xls", self.value())
    }

    /// The layout of the source spreadsheet.
    pub fn format(self) -> SheetFormat {
        match self {
            ElectionYear::Y2024 => SheetFormat::Format2024,
            _ => SheetFormat::Historical,
        }
    }
}

impl TryFrom<u32> for ElectionYear {
    type Error = ExtractionErrors;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        ElectionYear::ALL
            .iter()
            .copied()
            .find(|y| y.value() == value)
            .ok_or_else(|| ExtractionErrors::UnsupportedYear(value.to_string()))
    }
}

impl FromStr for ElectionYear {
    type Err = ExtractionErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(x) => ElectionYear::try_from(x),
            Err(_) => Err(ExtractionErrors::UnsupportedYear(s.to_string())),
        }
    }
}

impl Display for ElectionYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The spreadsheet layouts.
///
/// The 2024 results use fixed columns for the totals. The older files
/// (2009, 2014, 2019) have to be scanned.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum SheetFormat {
    Format2024,
    Historical,
}

// ******** Output data structures *********

/// The vote total read from a row.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct VoteTotal {
    pub votes: u64,
    /// The share read from the row, if the layout provides one.
    /// Otherwise it is computed once all the rows of the year are known.
    pub percent: Option<f64>,
}

/// The result of one party for one election.
#[derive(PartialEq, Debug, Clone)]
pub struct PartyResult {
    pub year: ElectionYear,
    pub party_name: String,
    pub total_votes: u64,
    /// Share of the national vote, in percent.
    ///
    /// Derived, hence within [0, 100], for the historical layouts. The 2024
    /// value is taken as published in the sheet and is not range-checked.
    pub total_percent: f64,
}

/// All the party results for one election, in the order of the source sheet.
#[derive(PartialEq, Debug, Clone)]
pub struct ElectionDataset {
    year: ElectionYear,
    parties: Vec<PartyResult>,
}

impl ElectionDataset {
    pub fn new(year: ElectionYear, parties: Vec<PartyResult>) -> ElectionDataset {
        ElectionDataset { year, parties }
    }

    pub fn year(&self) -> ElectionYear {
        self.year
    }

    pub fn parties(&self) -> &[PartyResult] {
        &self.parties
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }

    pub fn total_votes(&self) -> u64 {
        self.parties
            .iter()
            .fold(0, |acc, p| acc.saturating_add(p.total_votes))
    }

    /// The `n` parties with the most votes, largest first.
    pub fn top(&self, n: usize) -> Vec<&PartyResult> {
        let mut sorted: Vec<&PartyResult> = self.parties.iter().collect();
        // Stable sort: ties keep the sheet order.
        sorted.sort_by(|a, b| b.total_votes.cmp(&a.total_votes));
        sorted.truncate(n);
        sorted
    }
}

/// The results of several elections, by ascending year.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct CombinedDataset {
    records: Vec<PartyResult>,
}

impl CombinedDataset {
    pub fn new(datasets: &[ElectionDataset]) -> CombinedDataset {
        let mut sorted: Vec<&ElectionDataset> = datasets.iter().collect();
        sorted.sort_by_key(|ds| ds.year());
        CombinedDataset {
            records: sorted
                .iter()
                .flat_map(|ds| ds.parties().iter().cloned())
                .collect(),
        }
    }

    pub fn records(&self) -> &[PartyResult] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The distinct years present, in order.
    pub fn years(&self) -> Vec<ElectionYear> {
        let mut res: Vec<ElectionYear> = Vec::new();
        for r in self.records.iter() {
            if res.last() != Some(&r.year) {
                res.push(r.year);
            }
        }
        res
    }
}

/// Errors from this crate.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ExtractionErrors {
    UnsupportedYear(String),
}

impl Error for ExtractionErrors {}

impl Display for ExtractionErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionErrors::UnsupportedYear(y) => write!(
                f,
                "Unsupported election year {:?} (expected one of 2009, 2014, 2019, 2024)",
                y
            ),
        }
    }
}
