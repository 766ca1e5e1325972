//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command for the Duration Bench CLI,
//! which loads the configuration, runs every trial and reports the results.
//!
//! 此模块实现了 Duration Bench CLI 的 `run` 命令，
//! 它加载配置、运行所有试验并报告结果。

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{
        config::{self, BenchConfig, Overrides},
        execution::{run_benchmark_with, TrialEvent},
        models::BenchResults,
        stats::compare,
    },
    infra::t,
    reporting::{
        console::{print_comparisons, print_summary},
        json::render_json_report,
    },
};

/// Executes the run command with the provided arguments.
///
/// # Arguments
/// * `config_path` - Explicit config file; `None` looks for `Bench.toml`
/// * `overrides` - Values from command-line flags
/// * `cli_language` - The `--lang` value, if given
/// * `json` - Print a JSON document on stdout instead of the console summary
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub async fn execute(
    config_path: Option<PathBuf>,
    overrides: Overrides,
    cli_language: Option<String>,
    json: bool,
) -> Result<()> {
    let (mut config, loaded_from) = config::resolve_config(config_path.as_deref())?;

    let detected = cli_language.is_none() && loaded_from.is_none();
    let requested = match cli_language {
        Some(lang) => lang,
        None if loaded_from.is_some() => config.language.clone(),
        None => sys_locale::get_locale().unwrap_or_else(|| "en".to_string()),
    };
    let locale = crate::resolve_locale(&requested).to_string();
    rust_i18n::set_locale(&locale);

    config.apply(Overrides {
        language: Some(locale.clone()),
        ..overrides
    });

    let emit = |line: String| {
        if json {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    };

    if detected {
        emit(t!("run.system_language_detected", locale = &locale, lang = &locale).to_string());
    }
    match &loaded_from {
        Some(path) => emit(t!("run.loading_config", locale = &locale, path = path.display()).to_string()),
        None => emit(t!("run.using_defaults", locale = &locale).yellow().to_string()),
    }

    let results = run_with_progress(&config, &locale, &emit)
        .await
        .with_context(|| t!("run.benchmark_failed", locale = &locale).to_string())?;

    if json {
        println!("{}", render_json_report(&results, &config.baselines)?);
    } else {
        print_summary(&results, &locale);
        for baseline in &config.baselines {
            print_comparisons(&baseline.name, &compare(&results, baseline), &locale);
        }
    }

    Ok(())
}

/// Runs the benchmark, printing one line per trial through `emit`.
async fn run_with_progress(
    config: &BenchConfig,
    locale: &str,
    emit: &impl Fn(String),
) -> Result<BenchResults, crate::core::BenchError> {
    run_benchmark_with(config, |event| match event {
        TrialEvent::Prepared { plan, trials } => {
            emit(t!("run.working_dir", locale = locale, path = plan.working_dir.display()).to_string());
            emit(t!("run.command", locale = locale, command = plan.command.display_line()).to_string());
            emit(t!("run.trial_count", locale = locale, count = trials).bold().to_string());
        }
        TrialEvent::Started { index, total } => {
            emit(
                t!("run.trial_started", locale = locale, index = index + 1, total = total)
                    .blue()
                    .to_string(),
            );
        }
        TrialEvent::Finished {
            output,
            measurements,
        } => {
            let samples = measurements
                .iter()
                .map(|m| format!("{}: {}ms", m.label, m.duration_ms))
                .collect::<Vec<_>>()
                .join(", ");
            emit(
                t!(
                    "run.trial_finished",
                    locale = locale,
                    index = output.index + 1,
                    total = config.trials,
                    samples = samples,
                    seconds = format!("{:.2}", output.elapsed.as_secs_f64())
                )
                .green()
                .to_string(),
            );
            if !output.status.success() {
                let last_stderr = output.stderr.trim_end().lines().last().unwrap_or_default();
                emit(
                    t!(
                        "run.trial_exit_status",
                        locale = locale,
                        index = output.index + 1,
                        total = config.trials,
                        status = output.status,
                        stderr = last_stderr
                    )
                    .yellow()
                    .to_string(),
                );
            }
        }
    })
    .await
}
