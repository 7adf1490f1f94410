//! Type coercion of raw report cells into typed records.

use super::validation::ColumnIndices;
use crate::error::{PickerError, Result};
use crate::models::{Coordinate, InputRecord, InputTable};

/// Convert an identifier cell to an integer.
///
/// Integer text is taken as is; float text such as `5.0` is truncated
/// toward zero. Non-numeric, non-finite or out-of-range values fail.
pub fn normalize_identifier(value: &str, column: &str, row: usize) -> Result<i64> {
    let text = value.trim();
    if let Ok(id) = text.parse::<i64>() {
        return Ok(id);
    }

    // i64::MAX is not representable, so the upper bound is exclusive
    let in_range = |number: f64| number >= i64::MIN as f64 && number < i64::MAX as f64;
    match text.parse::<f64>() {
        Ok(number) if number.is_finite() && in_range(number) => Ok(number.trunc() as i64),
        _ => Err(conversion_error(column, row, value, "integer")),
    }
}

/// Convert a detection flag cell to a boolean
pub fn parse_detected(value: Option<&str>, column: &str, row: usize) -> Result<bool> {
    let text = value.unwrap_or("").trim();
    match text.to_ascii_lowercase().as_str() {
        "true" | "1" | "1.0" => Ok(true),
        "false" | "0" | "0.0" => Ok(false),
        _ => Err(conversion_error(column, row, text, "boolean")),
    }
}

/// Convert a coordinate cell to a float.
///
/// A missing or blank cell reads as NaN; only non-numeric text fails.
pub fn parse_coordinate(value: Option<&str>, column: &str, row: usize) -> Result<f64> {
    let text = value.unwrap_or("").trim();
    if text.is_empty() {
        return Ok(f64::NAN);
    }
    text.parse::<f64>()
        .map_err(|_| conversion_error(column, row, text, "number"))
}

/// Build typed records from a validated table, preserving row order
pub fn coerce_records(table: &InputTable, indices: &ColumnIndices) -> Result<Vec<InputRecord>> {
    let columns = table.columns();
    let coordinate = |row: usize, positions: [usize; 3]| -> Result<Coordinate> {
        let axis = |i: usize| {
            parse_coordinate(table.cell(row, positions[i]), &columns[positions[i]], row)
        };
        Ok(Coordinate::new(axis(0)?, axis(1)?, axis(2)?))
    };

    (0..table.len())
        .map(|row| {
            let id_text = table.cell(row, indices.id).unwrap_or("");
            Ok(InputRecord {
                id: normalize_identifier(id_text, &columns[indices.id], row)?,
                detected: parse_detected(
                    table.cell(row, indices.detected),
                    &columns[indices.detected],
                    row,
                )?,
                top: coordinate(row, indices.top)?,
                bottom: coordinate(row, indices.bottom)?,
            })
        })
        .collect()
}

fn conversion_error(column: &str, row: usize, value: &str, target: &'static str) -> PickerError {
    PickerError::TypeConversion {
        column: column.to_string(),
        row,
        value: value.to_string(),
        target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;
    use crate::processor::tests::{row, table_from};
    use crate::processor::validation::validate;

    #[test]
    fn test_float_identifier_truncated() {
        assert_eq!(normalize_identifier("12.0", "UPN", 0).unwrap(), 12);
        assert_eq!(normalize_identifier("5.9", "UPN", 0).unwrap(), 5);
        assert_eq!(normalize_identifier("-3.7", "UPN", 0).unwrap(), -3);
        assert_eq!(normalize_identifier(" 42 ", "UPN", 0).unwrap(), 42);
        assert_eq!(normalize_identifier("1e3", "UPN", 0).unwrap(), 1000);
    }

    #[test]
    fn test_large_integer_identifier_exact() {
        assert_eq!(
            normalize_identifier("9007199254740993", "UPN", 0).unwrap(),
            9_007_199_254_740_993
        );
    }

    #[test]
    fn test_non_numeric_identifier_rejected() {
        match normalize_identifier("abc", "UPN", 7).unwrap_err() {
            PickerError::TypeConversion { column, row, value, target } => {
                assert_eq!(column, "UPN");
                assert_eq!(row, 7);
                assert_eq!(value, "abc");
                assert_eq!(target, "integer");
            }
            other => panic!("Expected TypeConversion error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_identifier_rejected() {
        assert!(normalize_identifier("nan", "UPN", 0).is_err());
        assert!(normalize_identifier("inf", "UPN", 0).is_err());
        assert!(normalize_identifier("1e30", "UPN", 0).is_err());
    }

    #[test]
    fn test_detected_flag_variants() {
        assert!(parse_detected(Some("True"), "Detected", 0).unwrap());
        assert!(parse_detected(Some("TRUE"), "Detected", 0).unwrap());
        assert!(parse_detected(Some("1"), "Detected", 0).unwrap());
        assert!(!parse_detected(Some("False"), "Detected", 0).unwrap());
        assert!(!parse_detected(Some("0.0"), "Detected", 0).unwrap());
        assert!(parse_detected(Some("maybe"), "Detected", 0).is_err());
        assert!(parse_detected(None, "Detected", 0).is_err());
    }

    #[test]
    fn test_coordinate_parsing() {
        assert_eq!(parse_coordinate(Some("1.5"), "Top_X", 0).unwrap(), 1.5);
        assert_eq!(parse_coordinate(Some("-2e3"), "Top_X", 0).unwrap(), -2000.0);
        assert!(parse_coordinate(Some("north"), "Top_X", 0).is_err());
    }

    #[test]
    fn test_blank_coordinate_reads_as_nan() {
        assert!(parse_coordinate(None, "Top_X", 0).unwrap().is_nan());
        assert!(parse_coordinate(Some("  "), "Top_X", 0).unwrap().is_nan());
    }

    #[test]
    fn test_coerce_records_in_order() {
        let table = table_from(vec![
            row("7.0", "False", [1.5, 2.5, 3.5], [4.0, 5.0, 6.0]),
            row("3.0", "True", [10.0, 20.0, 30.0], [1.0, 1.0, 1.0]),
        ]);
        let indices = validate(&table, &PickerConfig::default()).unwrap();
        let records = coerce_records(&table, &indices).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 7);
        assert!(!records[0].detected);
        assert_eq!(records[0].top, Coordinate::new(1.5, 2.5, 3.5));
        assert_eq!(records[1].id, 3);
        assert_eq!(records[1].bottom, Coordinate::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_bad_coordinate_reports_column_and_row() {
        let mut bad = row("2", "True", [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]);
        bad[6] = Some("n/a".to_string());
        let table = table_from(vec![
            row("1", "True", [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
            bad,
        ]);
        let indices = validate(&table, &PickerConfig::default()).unwrap();

        match coerce_records(&table, &indices).unwrap_err() {
            PickerError::TypeConversion { column, row, .. } => {
                assert_eq!(column, "Bot_Y");
                assert_eq!(row, 1);
            }
            other => panic!("Expected TypeConversion error, got {:?}", other),
        }
    }
}
