//! # JSON Reporting Module / JSON 报告模块
//!
//! Renders the results, their statistics and baseline comparisons as a single
//! pretty-printed JSON document.
//!
//! 将结果、统计信息和基线对比渲染为一个格式化的 JSON 文档。

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{
    config::Baseline,
    models::{BenchResults, ResultSequence},
    stats::{compare, Comparison, SampleStats},
};

#[derive(Debug, Serialize)]
struct SequenceReport<'a> {
    #[serde(flatten)]
    sequence: &'a ResultSequence,
    stats: Option<SampleStats>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    started_at: String,
    finished_at: String,
    command: &'a str,
    working_dir: String,
    trials: usize,
    sequences: Vec<SequenceReport<'a>>,
    comparisons: Vec<Comparison>,
}

/// Builds the JSON report for a run.
///
/// # Arguments
/// * `results` - The results of a finished run
/// * `baselines` - Baselines to compare against; may be empty
///
/// # Returns
/// The pretty-printed JSON text.
pub fn render_json_report(results: &BenchResults, baselines: &[Baseline]) -> Result<String> {
    let report = JsonReport {
        started_at: results.started_at.to_rfc3339(),
        finished_at: results.finished_at.to_rfc3339(),
        command: &results.command,
        working_dir: results.working_dir.display().to_string(),
        trials: results.trials,
        sequences: results
            .sequences
            .iter()
            .map(|sequence| SequenceReport {
                sequence,
                stats: SampleStats::from_samples(&sequence.samples),
            })
            .collect(),
        comparisons: baselines
            .iter()
            .flat_map(|baseline| compare(results, baseline))
            .collect(),
    };

    serde_json::to_string_pretty(&report).context("Failed to serialize benchmark report")
}
