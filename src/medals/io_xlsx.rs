// Reader for medal tables kept in Excel workbooks.

use crate::medals::io_common::cell_to_count;
use crate::medals::*;

use calamine::{open_workbook, Reader, Xlsx};
use log::debug;
use snafu::prelude::*;

/// Reads the medal table from the named worksheet, or the first one. The
/// header row is matched by name, like the CSV reader.
pub fn read_excel_table(
    path: &str,
    worksheet: &Option<String>,
) -> MedalResult<Vec<ParsedMedalRow>> {
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu {
        path: path.to_string(),
    })?;
    let wrange = match worksheet {
        Some(name) => workbook.worksheet_range(name.as_str()),
        None => workbook.worksheet_range_at(0),
    }
    .context(EmptyExcelSnafu {})?
    .context(OpeningExcelSnafu {
        path: path.to_string(),
    })?;

    let mut rows = wrange.rows();
    let header = rows.next().context(EmptyExcelSnafu {})?;
    debug!("read_excel_table: header: {:?}", header);
    let col = |name: &str| -> MedalResult<usize> {
        header
            .iter()
            .position(
                |c| matches!(c, calamine::DataType::String(s) if s.trim().eq_ignore_ascii_case(name)),
            )
            .context(BadFieldSnafu {
                lineno: 1usize,
                field: name,
            })
    };
    let c_country = col("Country")?;
    let c_gold = col("Gold")?;
    let c_silver = col("Silver")?;
    let c_bronze = col("Bronze")?;
    let c_total = col("Total").ok();

    let mut res: Vec<ParsedMedalRow> = Vec::new();
    for (idx, row) in rows.enumerate() {
        let lineno = idx + 2;
        debug!("read_excel_table: {:?} {:?}", lineno, row);
        let candidate = match row.get(c_country) {
            Some(calamine::DataType::String(s)) => s.trim().to_string(),
            other => {
                return ExcelWrongCellTypeSnafu {
                    lineno,
                    content: format!("{:?}", other),
                }
                .fail();
            }
        };
        let gold = cell_to_count(get_cell(row, c_gold)?, lineno)?;
        let silver = cell_to_count(get_cell(row, c_silver)?, lineno)?;
        let bronze = cell_to_count(get_cell(row, c_bronze)?, lineno)?;
        let total = match c_total {
            Some(i) => Some(cell_to_count(get_cell(row, i)?, lineno)?),
            None => None,
        };
        res.push(ParsedMedalRow {
            noc: None,
            candidate: Some(candidate),
            gold,
            silver,
            bronze,
            total,
        });
    }
    Ok(res)
}

fn get_cell(row: &[calamine::DataType], idx: usize) -> MedalResult<&calamine::DataType> {
    row.get(idx).context(EmptyExcelSnafu {})
}
