//! Unit tests for ma-io.

#[cfg(test)]
mod fixtures {
    pub const DIAMOND: &str = "A\tD\nA\tB\t5\t1\nB\tC\t5\t2\nA\tC\t20\t3\nC\tD\t1\t4\n";

    pub const DIAMOND_REPORT: &str = "\
Fastest Route from A to D (11 KM):
A\tB\t5\t1
B\tC\t5\t2
C\tD\t1\t4
Roads of Barely Connected Map is:
C\tD\t1\t4
A\tB\t5\t1
B\tC\t5\t2
Fastest Route from A to D on Barely Connected Map (11 KM):
A\tB\t5\t1
B\tC\t5\t2
C\tD\t1\t4
Analysis:
Ratio of Construction Material Usage Between Barely Connected and Original Map: 0.35
Ratio of Fastest Route Between Barely Connected and Original Map: 1.00";
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Write;

    use ma_core::{RoadRecord, ValidationError};

    use crate::{MapIoError, load_map_file, load_map_reader};

    #[test]
    fn parses_header_and_roads() {
        let input = load_map_reader(super::fixtures::DIAMOND.as_bytes()).unwrap();
        assert_eq!(input.source, "A");
        assert_eq!(input.target, "D");
        assert_eq!(input.roads.len(), 4);
        assert_eq!(input.roads[2], RoadRecord::new("A", "C", 20, 3));
    }

    #[test]
    fn skips_blank_lines_and_trims() {
        let text = "\n  Ankara \t Izmir\n\nAnkara\t Bursa \t 7 \t10\n\nBursa\tIzmir\t3\t11\n\n";
        let input = load_map_reader(text.as_bytes()).unwrap();
        assert_eq!(input.source, "Ankara");
        assert_eq!(input.target, "Izmir");
        assert_eq!(
            input.roads,
            vec![RoadRecord::new("Ankara", "Bursa", 7, 10), RoadRecord::new("Bursa", "Izmir", 3, 11)]
        );
    }

    #[test]
    fn header_only_has_no_roads() {
        let input = load_map_reader("X\tY\n".as_bytes()).unwrap();
        assert!(input.roads.is_empty());
    }

    #[test]
    fn empty_input_is_missing_header() {
        assert!(matches!(load_map_reader("".as_bytes()), Err(MapIoError::MissingHeader)));
        assert!(matches!(load_map_reader("\n\n".as_bytes()), Err(MapIoError::MissingHeader)));
    }

    #[test]
    fn wrong_field_count_reports_line() {
        let err = load_map_reader("A\tB\nA\tB\t5\n".as_bytes()).unwrap_err();
        match err {
            MapIoError::Validation(ValidationError::MalformedRecord { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("expected 4 fields"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn header_with_three_fields_is_malformed() {
        let err = load_map_reader("A\tB\tC\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            MapIoError::Validation(ValidationError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn non_integer_length_is_malformed() {
        let err = load_map_reader("A\tB\n\nA\tB\tfive\t1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            MapIoError::Validation(ValidationError::MalformedRecord { line: 3, .. })
        ));
    }

    #[test]
    fn line_numbers_count_skipped_blank_lines() {
        let err = load_map_reader("\nA\tB\n\n\n  \nA\tB\t1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            MapIoError::Validation(ValidationError::MalformedRecord { line: 6, .. })
        ));
    }

    #[test]
    fn line_numbers_with_crlf() {
        let err = load_map_reader("A\tB\r\n\r\nA\tB\tx\t1\r\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            MapIoError::Validation(ValidationError::MalformedRecord { line: 3, .. })
        ));
    }

    #[test]
    fn trailing_tabs_ignored() {
        let input = load_map_reader("A\tB\t\nA\tB\t5\t1\t\nB\tC\t2\t2\t\t\n".as_bytes()).unwrap();
        assert_eq!((input.source.as_str(), input.target.as_str()), ("A", "B"));
        assert_eq!(
            input.roads,
            vec![RoadRecord::new("A", "B", 5, 1), RoadRecord::new("B", "C", 2, 2)]
        );
    }

    #[test]
    fn extra_non_empty_field_is_malformed() {
        let err = load_map_reader("A\tB\nA\tB\t5\t1\tx\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            MapIoError::Validation(ValidationError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn negative_length_is_left_to_validation() {
        let input = load_map_reader("A\tB\nA\tB\t-3\t1\n".as_bytes()).unwrap();
        assert_eq!(input.roads[0].length, -3);
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(super::fixtures::DIAMOND.as_bytes()).unwrap();
        let input = load_map_file(file.path()).unwrap();
        assert_eq!(input.roads.len(), 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_map_file(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, MapIoError::Io(_)));
    }
}

// ── Writer ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod writer {
    use ma_analysis::{NoopObserver, RouteAnalyzer};
    use ma_core::RoadRecord;

    use crate::{
        MAX_RATIO_DECIMALS, ReportWriter, TextReportWriter, format_ratio, load_map_reader,
        render_report,
    };

    fn diamond_analysis() -> ma_analysis::Analysis {
        let input = load_map_reader(super::fixtures::DIAMOND.as_bytes()).unwrap();
        RouteAnalyzer::default()
            .analyze(input.roads, &input.source, &input.target, &mut NoopObserver)
            .unwrap()
    }

    #[test]
    fn ratio_rounds_half_up() {
        assert_eq!(format_ratio(1, 8, 2), "0.13");
        assert_eq!(format_ratio(57, 200, 2), "0.29");
        assert_eq!(format_ratio(29, 200, 2), "0.15");
        assert_eq!(format_ratio(201, 200, 2), "1.01");
        assert_eq!(format_ratio(7, 7, 2), "1.00");
        assert_eq!(format_ratio(11, 31, 2), "0.35");
        assert_eq!(format_ratio(4, 3, 3), "1.333");
        assert_eq!(format_ratio(1, 2, 0), "1");
        assert_eq!(format_ratio(5, 2, 1), "2.5");
    }

    #[test]
    fn ratio_zero_denominator_is_one() {
        assert_eq!(format_ratio(0, 0, 2), "1.00");
    }

    #[test]
    fn ratio_decimals_are_clamped() {
        let text = format_ratio(1, 3, 500);
        assert_eq!(text, format!("0.{}", "3".repeat(MAX_RATIO_DECIMALS)));
        assert_eq!(format_ratio(u64::MAX, 1, usize::MAX), format!("{}.{}", u64::MAX, "0".repeat(12)));
    }

    #[test]
    fn exact_half_material_ratio_in_report() {
        let records = [RoadRecord::new("A", "B", 57, 1), RoadRecord::new("A", "B", 143, 2)];
        let a = RouteAnalyzer::default()
            .analyze(records, "A", "B", &mut NoopObserver)
            .unwrap();
        let text = render_report(&a, 2);
        assert!(
            text.contains("Between Barely Connected and Original Map: 0.29\n"),
            "{text}"
        );
    }

    #[test]
    fn diamond_report_text() {
        assert_eq!(render_report(&diamond_analysis(), 2), super::fixtures::DIAMOND_REPORT);
    }

    #[test]
    fn report_has_no_trailing_newline() {
        assert!(!render_report(&diamond_analysis(), 2).ends_with('\n'));
    }

    #[test]
    fn trivial_route_has_zero_length() {
        let a = RouteAnalyzer::default()
            .analyze([RoadRecord::new("P", "Q", 4, 9)], "P", "P", &mut NoopObserver)
            .unwrap();
        let text = render_report(&a, 2);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Fastest Route from P to P (0 KM):"));
        assert_eq!(lines.next(), Some("Roads of Barely Connected Map is:"));
        assert_eq!(lines.next(), Some("P\tQ\t4\t9"));
        assert_eq!(lines.next(), Some("Fastest Route from P to P on Barely Connected Map (0 KM):"));
        assert_eq!(lines.next(), Some("Analysis:"));
    }

    #[test]
    fn writes_to_buffer() {
        let mut w = TextReportWriter::new(Vec::new(), 2);
        w.write_report(&diamond_analysis()).unwrap();
        w.finish().unwrap();
        let bytes = w.into_inner();
        assert_eq!(String::from_utf8(bytes).unwrap(), super::fixtures::DIAMOND_REPORT);
    }

    #[test]
    fn writes_to_file_and_finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let mut w = TextReportWriter::create(&path, 2).unwrap();
        w.write_report(&diamond_analysis()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        drop(w);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, super::fixtures::DIAMOND_REPORT);
    }
}

// ── Load → analyze → render ───────────────────────────────────────────────────

#[cfg(test)]
mod end_to_end {
    use ma_analysis::{AnalysisError, NoopObserver, RouteAnalyzer};
    use ma_core::{RoadId, ValidationError};
    use ma_network::NetworkError;

    use crate::{load_map_reader, render_report};

    #[test]
    fn reduced_route_differs() {
        let text = "A\tC\nA\tB\t2\t1\nB\tC\t2\t2\nA\tC\t3\t3\n";
        let input = load_map_reader(text.as_bytes()).unwrap();
        let a = RouteAnalyzer::default()
            .analyze(input.roads, &input.source, &input.target, &mut NoopObserver)
            .unwrap();
        let report = render_report(&a, 2);
        assert!(report.contains("Fastest Route from A to C (3 KM):\nA\tC\t3\t3\n"));
        assert!(report.contains("on Barely Connected Map (4 KM):\nA\tB\t2\t1\nB\tC\t2\t2\n"));
        assert!(report.ends_with("Original Map: 0.57\nRatio of Fastest Route Between Barely Connected and Original Map: 1.33"));
    }

    #[test]
    fn disconnected_map_fails() {
        let text = "A\tB\nA\tB\t1\t1\nC\tD\t1\t2\n";
        let input = load_map_reader(text.as_bytes()).unwrap();
        let err = RouteAnalyzer::default()
            .analyze(input.roads, &input.source, &input.target, &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Network(NetworkError::DisconnectedGraph { .. })));
    }

    #[test]
    fn negative_length_rejected_by_analysis() {
        let input = load_map_reader("A\tB\nA\tB\t-3\t7\n".as_bytes()).unwrap();
        let err = RouteAnalyzer::default()
            .analyze(input.roads, &input.source, &input.target, &mut NoopObserver)
            .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Validation(ValidationError::InvalidLength { id: RoadId(7), length: -3 })
        );
    }
}
