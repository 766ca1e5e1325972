// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::{config::Overrides, config::ReportFormat, infra::t};

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang=").map(str::to_string))
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("duration-bench")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cmd.run_about", locale = locale).to_string())
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg.config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("trials")
                        .short('n')
                        .long("trials")
                        .help(t!("arg.trials", locale = locale).to_string())
                        .value_name("TRIALS")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("spec")
                        .long("spec")
                        .help(t!("arg.spec", locale = locale).to_string())
                        .value_name("SPEC")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("working-dir")
                        .long("working-dir")
                        .help(t!("arg.working_dir", locale = locale).to_string())
                        .value_name("WORKING_DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("command")
                        .long("command")
                        .help(t!("arg.command", locale = locale).to_string())
                        .value_name("COMMAND")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help(t!("arg.format", locale = locale).to_string())
                        .value_name("FORMAT")
                        .value_parser(|s: &str| s.parse::<ReportFormat>())
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("measurements")
                        .long("measurements")
                        .help(t!("arg.measurements", locale = locale).to_string())
                        .value_name("MEASUREMENTS")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("timeout")
                        .long("timeout")
                        .help(t!("arg.timeout", locale = locale).to_string())
                        .value_name("SECONDS")
                        .value_parser(clap::value_parser!(u64))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help(t!("arg.json", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd.init_about", locale = locale).to_string())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("arg.output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .default_value(crate::config::DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg.force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Collects the `run` flags that override config file values.
fn overrides_from(matches: &ArgMatches) -> Overrides {
    Overrides {
        language: None,
        trials: matches.get_one::<usize>("trials").copied(),
        working_dir: matches.get_one::<PathBuf>("working-dir").cloned(),
        spec: matches.get_one::<String>("spec").cloned(),
        command: matches.get_one::<String>("command").cloned(),
        format: matches.get_one::<ReportFormat>("format").copied(),
        measurements: matches.get_one::<usize>("measurements").copied(),
        timeout_secs: matches.get_one::<u64>("timeout").copied(),
    }
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let cli_language = pre_parse_language();
    let help_language = cli_language
        .clone()
        .unwrap_or_else(|| sys_locale::get_locale().unwrap_or_else(|| "en".to_string()));
    let help_language = crate::resolve_locale(&help_language).to_string();
    rust_i18n::set_locale(&help_language);

    let matches = build_cli(&help_language).get_matches();
    let cli_language = matches.get_one::<String>("lang").cloned().or(cli_language);

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            commands::run::execute(
                run_matches.get_one::<PathBuf>("config").cloned(),
                overrides_from(run_matches),
                cli_language,
                run_matches.get_flag("json"),
            )
            .await?;
        }
        Some(("init", init_matches)) => {
            let output = init_matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(crate::config::DEFAULT_CONFIG_FILE));
            let force = init_matches.get_flag("force");
            commands::init::execute(output, force, &help_language)?;
        }
        _ => {
            // subcommand_required makes clap print help and exit before this point.
        }
    }
    Ok(())
}
