//! # Statistics Module / 统计模块
//!
//! Summary statistics for result sequences and comparison against baselines.
//!
//! 结果序列的汇总统计以及与基线的对比。

use serde::{Deserialize, Serialize};

use crate::core::{config::Baseline, models::BenchResults};

/// Summary statistics over a set of millisecond samples.
/// 一组毫秒样本的汇总统计。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: u64,
    pub max: u64,
    /// Population standard deviation / 总体标准差
    pub std_dev: f64,
}

impl SampleStats {
    /// Calculates statistics from samples, or `None` when there are none.
    pub fn from_samples(samples: &[u64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        let count = sorted.len();
        let mean = sorted.iter().map(|&s| s as f64).sum::<f64>() / count as f64;
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] as f64 + sorted[count / 2] as f64) / 2.0
        } else {
            sorted[count / 2] as f64
        };
        let variance = sorted
            .iter()
            .map(|&s| (s as f64 - mean).powi(2))
            .sum::<f64>()
            / count as f64;

        Some(Self {
            count,
            mean,
            median,
            min: sorted[0],
            max: sorted[count - 1],
            std_dev: variance.sqrt(),
        })
    }

    /// Format as summary string
    pub fn format_summary(&self) -> String {
        format!(
            "mean={:.1}ms median={:.1}ms min={}ms max={}ms std={:.1}ms",
            self.mean, self.median, self.min, self.max, self.std_dev
        )
    }
}

/// How one result sequence compares with the matching baseline sequence.
/// 单个结果序列与对应基线序列的对比。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub baseline: String,
    pub label: String,
    pub baseline_mean: f64,
    pub current_mean: f64,
    /// `current_mean - baseline_mean`; negative means the current run is faster.
    pub delta_ms: f64,
    /// Delta relative to the baseline mean, in percent.
    pub delta_pct: f64,
    /// `baseline_mean / current_mean`; above 1.0 means the current run is faster.
    pub speedup: f64,
}

/// Compares each result sequence with the baseline sequence at the same position.
/// Positions missing on either side, or empty on either side, are skipped.
///
/// 将每个结果序列与同一位置的基线序列进行比较。任一侧缺失或为空的位置会被跳过。
pub fn compare(results: &BenchResults, baseline: &Baseline) -> Vec<Comparison> {
    results
        .sequences
        .iter()
        .zip(&baseline.sequences)
        .filter_map(|(current, recorded)| {
            let current_stats = SampleStats::from_samples(&current.samples)?;
            let baseline_stats = SampleStats::from_samples(recorded)?;
            let delta_ms = current_stats.mean - baseline_stats.mean;
            let delta_pct = if baseline_stats.mean == 0.0 {
                0.0
            } else {
                delta_ms / baseline_stats.mean * 100.0
            };
            let speedup = if current_stats.mean == 0.0 {
                0.0
            } else {
                baseline_stats.mean / current_stats.mean
            };

            Some(Comparison {
                baseline: baseline.name.clone(),
                label: current.label.clone(),
                baseline_mean: baseline_stats.mean,
                current_mean: current_stats.mean,
                delta_ms,
                delta_pct,
                speedup,
            })
        })
        .collect()
}
