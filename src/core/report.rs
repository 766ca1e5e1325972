//! # Report Parsing Module / 报告解析模块
//!
//! Turns the standard output of one trial into an ordered list of duration
//! samples. Playwright's JSON reporter output is parsed structurally; any
//! other output is scanned for a literal marker that precedes each duration.
//!
//! 将一次试验的标准输出转换为有序的耗时样本列表。
//! Playwright 的 JSON 报告会被结构化解析；其他输出则通过扫描每个耗时前的字面标记来提取。

use serde::Deserialize;

use crate::core::{
    config::ReportFormat,
    error::ReportError,
    models::{positional_label, Measurement},
};

/// Top level of a Playwright `--reporter=json` document.
/// Only the fields needed to find test durations are modelled.
#[derive(Debug, Deserialize)]
pub struct PlaywrightReport {
    #[serde(default)]
    pub suites: Vec<Suite>,
}

/// A file or `describe` block. Nested suites follow the suite's own specs.
#[derive(Debug, Deserialize)]
pub struct Suite {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub specs: Vec<Spec>,
    #[serde(default)]
    pub suites: Vec<Suite>,
}

/// A single `test(...)` declaration.
#[derive(Debug, Deserialize)]
pub struct Spec {
    pub title: String,
    #[serde(default)]
    pub tests: Vec<SpecTest>,
}

/// One execution of a spec for a given project.
#[derive(Debug, Deserialize)]
pub struct SpecTest {
    #[serde(default, rename = "projectName")]
    pub project_name: String,
    #[serde(default)]
    pub results: Vec<TestRunResult>,
}

/// One attempt of a test. Retries add further entries.
#[derive(Debug, Deserialize)]
pub struct TestRunResult {
    pub duration: u64,
}

impl PlaywrightReport {
    /// Collects one measurement per test in document order, using the
    /// duration of each test's first attempt.
    pub fn measurements(&self) -> Vec<Measurement> {
        let mut out = Vec::new();
        for suite in &self.suites {
            collect_suite(suite, &mut out);
        }
        out
    }
}

fn collect_suite(suite: &Suite, out: &mut Vec<Measurement>) {
    for spec in &suite.specs {
        for test in &spec.tests {
            if let Some(first) = test.results.first() {
                let label = if test.project_name.is_empty() {
                    spec.title.clone()
                } else {
                    format!("{} [{}]", spec.title, test.project_name)
                };
                out.push(Measurement {
                    label,
                    duration_ms: first.duration,
                });
            }
        }
    }
    for child in &suite.suites {
        collect_suite(child, out);
    }
}

/// Parses `text` as a Playwright JSON report.
pub fn parse_json_report(text: &str) -> Result<Vec<Measurement>, ReportError> {
    let report: PlaywrightReport = serde_json::from_str(text.trim())?;
    Ok(report.measurements())
}

/// Scans `text` for `marker` and reads the integer following each occurrence.
///
/// Only the first `limit` occurrences are parsed; text after later markers is
/// never inspected. The value ends at the first `,`, newline or `}`.
///
/// 在 `text` 中扫描 `marker` 并读取每次出现之后的整数。
/// 只解析前 `limit` 次出现；之后的标记文本不会被检查。数值在第一个 `,`、换行或 `}` 处结束。
pub fn scan_markers(text: &str, marker: &str, limit: usize) -> Result<Vec<Measurement>, ReportError> {
    if marker.is_empty() {
        return Ok(vec![]);
    }

    text.split(marker)
        .skip(1)
        .take(limit)
        .enumerate()
        .map(|(position, piece)| {
            let raw = piece
                .split([',', '\n', '}'])
                .next()
                .unwrap_or_default()
                .trim();
            raw.parse::<u64>()
                .map(|duration_ms| Measurement {
                    label: positional_label(position),
                    duration_ms,
                })
                .map_err(|_| ReportError::InvalidDuration {
                    value: raw.to_string(),
                })
        })
        .collect()
}

/// Extracts exactly `expected` measurements from a trial's output.
///
/// # Arguments
/// * `text` - The captured standard output
/// * `format` - Which parser to use; `Auto` tries JSON first and falls back
///   to the marker scan when that yields nothing
/// * `marker` - The literal marker used by the marker scan
/// * `expected` - How many samples the trial must yield
///
/// # Returns
/// The first `expected` measurements in report order, or
/// `ReportError::Malformed` if the output holds fewer.
pub fn parse_report(
    text: &str,
    format: ReportFormat,
    marker: &str,
    expected: usize,
) -> Result<Vec<Measurement>, ReportError> {
    let measurements = match format {
        ReportFormat::Json => parse_json_report(text)?,
        ReportFormat::Marker => scan_markers(text, marker, expected)?,
        ReportFormat::Auto => match parse_json_report(text) {
            Ok(measurements) if !measurements.is_empty() => measurements,
            _ => scan_markers(text, marker, expected)?,
        },
    };
    take_samples(measurements, expected)
}

/// Keeps the first `expected` measurements, failing if there are fewer.
pub fn take_samples(
    mut measurements: Vec<Measurement>,
    expected: usize,
) -> Result<Vec<Measurement>, ReportError> {
    if measurements.len() < expected {
        return Err(ReportError::Malformed {
            expected,
            found: measurements.len(),
        });
    }
    measurements.truncate(expected);
    Ok(measurements)
}
