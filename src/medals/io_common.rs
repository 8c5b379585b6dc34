use crate::medals::*;

use snafu::prelude::*;

/// Parses a non-negative integer field. Negative or fractional counts are
/// rejected here, before any ranking runs.
pub fn parse_count(s: &str, lineno: usize, field: &str) -> MedalResult<u64> {
    s.trim().parse::<u64>().ok().context(BadFieldSnafu {
        lineno,
        field: format!("{} ({:?})", field, s),
    })
}

/// Reads a count out of a spreadsheet cell. Excel stores integers as floats,
/// so whole floats are accepted; anything else is not a medal count.
pub fn cell_to_count(cell: &calamine::DataType, lineno: usize) -> MedalResult<u64> {
    match cell {
        calamine::DataType::Int(i) if *i >= 0 => Ok(*i as u64),
        calamine::DataType::Float(f) if *f >= 0.0 && f.fract() == 0.0 => Ok(*f as u64),
        calamine::DataType::String(s) => s.trim().parse::<u64>().ok().context(
            ExcelWrongCellTypeSnafu {
                lineno,
                content: s.clone(),
            },
        ),
        _ => ExcelWrongCellTypeSnafu {
            lineno,
            content: format!("{:?}", cell),
        }
        .fail(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_non_negative_integers() {
        assert_eq!(parse_count("12", 1, "Gold").unwrap(), 12);
        assert_eq!(parse_count(" 0 ", 1, "Gold").unwrap(), 0);
        assert!(parse_count("-1", 1, "Gold").is_err());
        assert!(parse_count("2.5", 1, "Gold").is_err());
    }

    #[test]
    fn cells_accept_whole_floats_only() {
        assert_eq!(cell_to_count(&calamine::DataType::Int(3), 2).unwrap(), 3);
        assert_eq!(cell_to_count(&calamine::DataType::Float(3.0), 2).unwrap(), 3);
        assert!(cell_to_count(&calamine::DataType::Float(3.5), 2).is_err());
        assert!(cell_to_count(&calamine::DataType::Int(-3), 2).is_err());
        assert!(cell_to_count(&calamine::DataType::Empty, 2).is_err());
    }
}
