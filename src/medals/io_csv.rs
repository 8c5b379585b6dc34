// Primitives for reading the medal table from CSV files.

use crate::medals::io_common::parse_count;
use crate::medals::*;

use log::debug;
use snafu::prelude::*;

/// Reads a `Country,Gold,Silver,Bronze,Total` table. Header names are
/// matched case-insensitively; the `Total` column is optional.
pub fn read_csv_table(path: &str) -> MedalResult<Vec<ParsedMedalRow>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(CsvOpenSnafu {})?;
    parse_csv(rdr)
}

fn parse_csv<R: std::io::Read>(mut rdr: csv::Reader<R>) -> MedalResult<Vec<ParsedMedalRow>> {
    let headers = rdr.headers().context(CsvOpenSnafu {})?.clone();
    let col = |name: &str| -> MedalResult<usize> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .context(BadFieldSnafu {
                lineno: 1usize,
                field: name,
            })
    };
    let c_country = col("Country")?;
    let c_gold = col("Gold")?;
    let c_silver = col("Silver")?;
    let c_bronze = col("Bronze")?;
    let c_total = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("Total"));

    let mut res: Vec<ParsedMedalRow> = Vec::new();
    for (idx, line_r) in rdr.into_records().enumerate() {
        // Line 1 is the header.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        debug!("parse_csv: {:?} {:?}", lineno, line);
        let candidate = get_field(&line, c_country, lineno, "Country")?.trim().to_string();
        let gold = parse_count(get_field(&line, c_gold, lineno, "Gold")?, lineno, "Gold")?;
        let silver = parse_count(get_field(&line, c_silver, lineno, "Silver")?, lineno, "Silver")?;
        let bronze = parse_count(get_field(&line, c_bronze, lineno, "Bronze")?, lineno, "Bronze")?;
        let total = match c_total {
            Some(i) => Some(parse_count(
                get_field(&line, i, lineno, "Total")?,
                lineno,
                "Total",
            )?),
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

fn get_field<'a>(
    line: &'a csv::StringRecord,
    idx: usize,
    lineno: usize,
    name: &str,
) -> MedalResult<&'a str> {
    line.get(idx).context(BadFieldSnafu {
        lineno,
        field: name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(content: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content.as_bytes())
    }

    #[test]
    fn reads_a_full_table() {
        let content = "Country,Gold,Silver,Bronze,Total\nUSA,40,44,42,126\nFRA,16,26,22,64\n";
        let rows = parse_csv(reader(content)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].candidate.as_deref(), Some("USA"));
        assert_eq!(rows[0].gold, 40);
        assert_eq!(rows[0].total, Some(126));
    }

    #[test]
    fn total_column_is_optional() {
        let content = "Country,Gold,Silver,Bronze\nKEN,4,2,5\n";
        let rows = parse_csv(reader(content)).unwrap();
        assert_eq!(rows[0].total, None);
    }

    #[test]
    fn missing_column_is_an_error() {
        let content = "Country,Gold,Silver\nKEN,4,2\n";
        let res = parse_csv(reader(content));
        assert!(matches!(res, Err(MedalError::BadField { .. })));
    }

    #[test]
    fn negative_count_is_an_error() {
        let content = "Country,Gold,Silver,Bronze\nKEN,-4,2,5\n";
        let res = parse_csv(reader(content));
        assert!(matches!(res, Err(MedalError::BadField { lineno: 2, .. })));
    }
}
