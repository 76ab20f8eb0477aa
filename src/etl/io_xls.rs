// Reading the legacy Excel (.xls) spreadsheets.

use calamine::{open_workbook, DataType, Range, Reader, Xls};

use crate::etl::*;

/// Loads the first worksheet of the raw files with calamine.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineLoader;

impl SheetLoader for CalamineLoader {
    fn load(&self, path: &Path) -> EtlResult<RawSheet> {
        read_xls_sheet(path)
    }
}

pub fn read_xls_sheet(path: &Path) -> EtlResult<RawSheet> {
    let p = path.display().to_string();
    let mut workbook: Xls<_> =
        open_workbook(path).context(OpeningExcelSnafu { path: p.clone() })?;
    let wrange = workbook
        .worksheet_range_at(0)
        .context(EmptyExcelSnafu { path: p.clone() })?
        .context(OpeningExcelSnafu { path: p.clone() })?;
    debug!(
        "read_xls_sheet: {}: range starting at {:?}, size {:?}",
        p,
        wrange.start(),
        wrange.get_size()
    );
    Ok(range_to_sheet(&wrange))
}

/// Converts a calamine range to a sheet.
///
/// calamine trims the empty rows and columns at the top and at the left of the
/// worksheet. They are restored so that the positions match the worksheet.
pub fn range_to_sheet(range: &Range<DataType>) -> RawSheet {
    let (row0, col0) = range.start().unwrap_or((0, 0));
    let mut grid: Vec<Vec<Cell>> = (0..row0).map(|_| Vec::new()).collect();
    for row in range.rows() {
        let mut cells: Vec<Cell> = vec![Cell::Empty; col0 as usize];
        cells.extend(row.iter().map(read_cell));
        grid.push(cells);
    }
    RawSheet::from_grid(grid)
}

fn read_cell(cell: &DataType) -> Cell {
    match cell {
        DataType::String(s) => Cell::String(s.clone()),
        DataType::Float(f) => Cell::Float(*f),
        DataType::Int(i) => Cell::Int(*i),
        DataType::Bool(b) => Cell::Bool(*b),
        // Dates and errors carry no party data.
        _ => Cell::Empty,
    }
}
