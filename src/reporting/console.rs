//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints benchmark results to the console: every result sequence
//! with its samples and summary statistics, followed by comparisons against
//! any recorded baselines.
//!
//! 此模块在控制台打印基准测试结果：每个结果序列的样本和汇总统计，
//! 以及与已记录基线的对比。

use colored::*;

use crate::core::{
    models::BenchResults,
    stats::{Comparison, SampleStats},
};
use crate::infra::t;

/// Prints a formatted summary of the result sequences.
///
/// 在控制台打印结果序列的格式化摘要。
///
/// # Arguments / 参数
/// * `results` - The results of a finished run / 已完成运行的结果
/// * `locale` - The language locale to use for messages / 用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// --- Benchmark Summary ---
///   - has tiers                      | mean   1556.5ms | median   1470.0ms | min  1395ms | max  2019ms | std   195.1ms
///     [1483, 1402, 1395, 1426, 1570, 2019, 1873, 1443, 1516, 1438]
/// ```
pub fn print_summary(results: &BenchResults, locale: &str) {
    println!("\n{}", t!("report.summary_banner", locale = locale).bold());
    println!(
        "{}",
        t!(
            "report.trials_completed",
            locale = locale,
            count = results.trials,
            seconds = format!(
                "{:.2}",
                (results.finished_at - results.started_at).num_milliseconds() as f64 / 1000.0
            )
        )
        .dimmed()
    );

    for sequence in &results.sequences {
        match SampleStats::from_samples(&sequence.samples) {
            Some(stats) => {
                println!(
                    "  - {:<30} | mean {:>8.1}ms | median {:>8.1}ms | min {:>5}ms | max {:>5}ms | std {:>7.1}ms",
                    sequence.label.cyan(),
                    stats.mean,
                    stats.median,
                    stats.min,
                    stats.max,
                    stats.std_dev
                );
                println!("    {:?}", sequence.samples);
            }
            None => println!(
                "  - {:<30} | {}",
                sequence.label.cyan(),
                t!("report.no_samples", locale = locale).dimmed()
            ),
        }
    }
}

/// Prints how the run compares with one baseline.
///
/// A negative delta means the current run is faster and is printed in green.
///
/// 打印本次运行与某个基线的对比。负的差值表示本次运行更快，以绿色显示。
pub fn print_comparisons(baseline_name: &str, comparisons: &[Comparison], locale: &str) {
    println!(
        "\n{}",
        t!("report.comparison_banner", locale = locale, name = baseline_name).bold()
    );

    if comparisons.is_empty() {
        println!("  {}", t!("report.no_comparable_sequences", locale = locale).dimmed());
        return;
    }

    for comparison in comparisons {
        let delta = format!(
            "{:+.1}ms ({:+.1}%)",
            comparison.delta_ms, comparison.delta_pct
        );
        let delta_colored = if comparison.delta_ms < 0.0 {
            delta.green()
        } else if comparison.delta_ms > 0.0 {
            delta.red()
        } else {
            delta.normal()
        };

        println!(
            "  - {:<30} | {} {:>8.1}ms | {} {:>8.1}ms | {} | x{:.2}",
            comparison.label.cyan(),
            baseline_name,
            comparison.baseline_mean,
            t!("report.current", locale = locale),
            comparison.current_mean,
            delta_colored,
            comparison.speedup
        );
    }
}
