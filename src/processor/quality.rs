//! Run statistics and data quality checks over the retained records.

use crate::models::{InputRecord, QualityWarning, Statistics};

/// Count retained, detected and non-detected rows.
///
/// Each output sequence holds one row per retained record, so both output
/// counts equal the retained count.
pub fn compute_statistics(retained: &[InputRecord], source_rows: usize) -> Statistics {
    let detected_count = retained.iter().filter(|record| record.detected).count();

    Statistics {
        source_rows,
        zero_depth_removed: source_rows.saturating_sub(retained.len()),
        input_rows: retained.len(),
        top_output_rows: retained.len(),
        bottom_output_rows: retained.len(),
        detected_count,
        non_detected_count: retained.len() - detected_count,
    }
}

/// Look for detection flags that disagree with the top coordinates.
///
/// Findings are only returned; the caller decides how to report them.
pub fn detect_quality_anomalies(retained: &[InputRecord]) -> Vec<QualityWarning> {
    let detected_but_zero = retained
        .iter()
        .filter(|record| record.detected && record.top.has_zero_component())
        .count();
    let non_detected_with_coordinates = retained
        .iter()
        .filter(|record| !record.detected && record.top.has_nonzero_component())
        .count();

    let mut warnings = Vec::new();
    if detected_but_zero > 0 {
        warnings.push(QualityWarning::DetectedWithZeroCoordinate {
            count: detected_but_zero,
        });
    }
    if non_detected_with_coordinates > 0 {
        warnings.push(QualityWarning::NonDetectedWithCoordinates {
            count: non_detected_with_coordinates,
        });
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn record(detected: bool, top: [f64; 3]) -> InputRecord {
        InputRecord {
            id: 1,
            detected,
            top: Coordinate::new(top[0], top[1], top[2]),
            bottom: Coordinate::new(1.0, 1.0, 1.0),
        }
    }

    #[test]
    fn test_statistics_counts() {
        let records = vec![
            record(true, [1.0, 1.0, 1.0]),
            record(false, [0.0, 0.0, 1.0]),
            record(true, [2.0, 2.0, 2.0]),
        ];
        let stats = compute_statistics(&records, 5);

        assert_eq!(stats.source_rows, 5);
        assert_eq!(stats.zero_depth_removed, 2);
        assert_eq!(stats.input_rows, 3);
        assert_eq!(stats.top_output_rows, 3);
        assert_eq!(stats.bottom_output_rows, 3);
        assert_eq!(stats.detected_count, 2);
        assert_eq!(stats.non_detected_count, 1);
    }

    #[test]
    fn test_no_warnings_for_consistent_rows() {
        let records = vec![
            record(true, [1.0, 2.0, 3.0]),
            record(false, [0.0, 0.0, 0.0]),
        ];
        assert!(detect_quality_anomalies(&records).is_empty());
    }

    #[test]
    fn test_both_anomalies_counted() {
        let records = vec![
            record(true, [0.0, 2.0, 3.0]),
            record(true, [1.0, 0.0, 3.0]),
            record(false, [0.0, 0.0, 4.0]),
            record(true, [1.0, 2.0, 3.0]),
        ];
        let warnings = detect_quality_anomalies(&records);

        assert_eq!(
            warnings,
            vec![
                QualityWarning::DetectedWithZeroCoordinate { count: 2 },
                QualityWarning::NonDetectedWithCoordinates { count: 1 },
            ]
        );
    }

    #[test]
    fn test_bottom_coordinates_not_inspected() {
        let mut hidden = record(false, [0.0, 0.0, 0.0]);
        hidden.bottom = Coordinate::new(9.0, 9.0, 9.0);
        assert!(detect_quality_anomalies(&[hidden]).is_empty());
    }
}
