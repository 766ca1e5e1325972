//! # Report Parsing Unit Tests / 报告解析单元测试
//!
//! Tests for turning runner output into duration samples, both from
//! Playwright JSON documents and from marker-delimited text.
//!
//! 测试将运行器输出转换为耗时样本，包括 Playwright JSON 文档和基于标记的文本。

mod common;

use common::PLAYWRIGHT_REPORT;
use duration_bench::config::ReportFormat;
use duration_bench::core::error::ReportError;
use duration_bench::core::report::{parse_json_report, parse_report, scan_markers, take_samples};
use duration_bench::models::Measurement;

const MARKER: &str = "\"duration\": ";

fn durations(measurements: &[Measurement]) -> Vec<u64> {
    measurements.iter().map(|m| m.duration_ms).collect()
}

#[cfg(test)]
mod json_tests {
    use super::*;

    #[test]
    fn test_playwright_report_yields_one_sample_per_test() {
        let found = parse_json_report(PLAYWRIGHT_REPORT).unwrap();

        assert_eq!(durations(&found), vec![1483, 1356]);
        assert_eq!(found[0].label, "Can load tiers page");
    }

    #[test]
    fn test_nested_suites_follow_their_parent_specs() {
        let report = r#"{
          "suites": [{
            "title": "a.spec.ts",
            "specs": [{ "title": "top", "tests": [{ "results": [{ "duration": 1 }] }] }],
            "suites": [{
              "title": "describe block",
              "specs": [{ "title": "inner", "tests": [{ "results": [{ "duration": 2 }] }] }]
            }]
          }, {
            "title": "b.spec.ts",
            "specs": [{ "title": "second file", "tests": [{ "results": [{ "duration": 3 }] }] }]
          }]
        }"#;

        let found = parse_json_report(report).unwrap();

        assert_eq!(durations(&found), vec![1, 2, 3]);
        assert_eq!(found[1].label, "inner");
    }

    #[test]
    fn test_projects_and_retries() {
        let report = r#"{
          "suites": [{
            "title": "a.spec.ts",
            "specs": [{
              "title": "login",
              "tests": [
                { "projectName": "chromium", "results": [{ "duration": 40, "status": "failed" }, { "duration": 35 }] },
                { "projectName": "firefox", "results": [{ "duration": 50 }] },
                { "projectName": "webkit", "results": [] }
              ]
            }]
          }]
        }"#;

        let found = parse_json_report(report).unwrap();

        assert_eq!(durations(&found), vec![40, 50]);
        assert_eq!(found[0].label, "login [chromium]");
        assert_eq!(found[1].label, "login [firefox]");
    }

    #[test]
    fn test_forced_json_rejects_text() {
        let err = parse_report("\"duration\": 1, \"duration\": 2,", ReportFormat::Json, MARKER, 2)
            .unwrap_err();
        assert!(matches!(err, ReportError::InvalidJson(_)));
    }
}

#[cfg(test)]
mod marker_tests {
    use super::*;

    #[test]
    fn test_scenario_output_yields_both_values() {
        let text = r#"..."duration": 100, ..."duration": 200,..."#;

        let found = parse_report(text, ReportFormat::Marker, MARKER, 2).unwrap();

        assert_eq!(durations(&found), vec![100, 200]);
        assert_eq!(found[0].label, "#1");
        assert_eq!(found[1].label, "#2");
    }

    #[test]
    fn test_grep_style_lines() {
        let text = "        \"duration\": 1483,\n        \"duration\": 1356,\n    \"duration\": 4210.5\n";

        let found = parse_report(text, ReportFormat::Marker, MARKER, 2).unwrap();

        assert_eq!(durations(&found), vec![1483, 1356]);
    }

    #[test]
    fn test_single_marker_is_malformed() {
        let err = parse_report("\"duration\": 100,", ReportFormat::Marker, MARKER, 2).unwrap_err();
        assert!(matches!(err, ReportError::Malformed { expected: 2, found: 1 }));
    }

    #[test]
    fn test_no_marker_is_malformed() {
        let err = parse_report("all tests passed", ReportFormat::Marker, MARKER, 2).unwrap_err();
        assert!(matches!(err, ReportError::Malformed { expected: 2, found: 0 }));
    }

    #[test]
    fn test_fractional_value_is_invalid() {
        let err = scan_markers("\"duration\": 12.5,", MARKER, 1).unwrap_err();
        match err {
            ReportError::InvalidDuration { value } => assert_eq!(value, "12.5"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_marker() {
        let found = scan_markers("a took=5; b took=9;", "took=", 2);
        // ';' is not a separator, so the value runs to the end of the piece.
        assert!(found.is_err());

        let found = scan_markers("a took=5, b took=9,", "took=", 2).unwrap();
        assert_eq!(durations(&found), vec![5, 9]);
    }
}

#[cfg(test)]
mod auto_tests {
    use super::*;

    #[test]
    fn test_auto_prefers_json() {
        let found = parse_report(PLAYWRIGHT_REPORT, ReportFormat::Auto, MARKER, 2).unwrap();
        assert_eq!(found[1].label, "Can contribute to a tier");
    }

    #[test]
    fn test_auto_falls_back_to_markers_for_text() {
        let found = parse_report("\"duration\": 3, \"duration\": 4,", ReportFormat::Auto, MARKER, 2)
            .unwrap();
        assert_eq!(durations(&found), vec![3, 4]);
    }

    #[test]
    fn test_auto_falls_back_when_json_has_no_tests() {
        let found = parse_report(
            r#"{"first": {"duration": 5, "x": 1}, "second": {"duration": 6, "x": 2}}"#,
            ReportFormat::Auto,
            MARKER,
            2,
        )
        .unwrap();
        assert_eq!(durations(&found), vec![5, 6]);
    }

    #[test]
    fn test_extra_samples_are_dropped() {
        let measurements = (0..4)
            .map(|i| Measurement {
                label: format!("t{i}"),
                duration_ms: i,
            })
            .collect();

        let kept = take_samples(measurements, 2).unwrap();

        assert_eq!(durations(&kept), vec![0, 1]);
    }
}
