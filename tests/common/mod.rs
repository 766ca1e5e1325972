// Shared test helpers for integration tests
#![allow(dead_code)]

use duration_bench::config::BenchConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// A small Playwright JSON report with two tests in one file suite.
pub const PLAYWRIGHT_REPORT: &str = r#"{
  "config": { "workers": 1 },
  "suites": [
    {
      "title": "16-tiers-page.spec.ts",
      "file": "16-tiers-page.spec.ts",
      "specs": [
        {
          "title": "Can load tiers page",
          "tests": [
            {
              "projectName": "",
              "results": [ { "workerIndex": 0, "status": "passed", "duration": 1483, "errors": [] } ]
            }
          ]
        },
        {
          "title": "Can contribute to a tier",
          "tests": [
            {
              "projectName": "",
              "results": [ { "workerIndex": 0, "status": "passed", "duration": 1356, "errors": [] } ]
            }
          ]
        }
      ]
    }
  ],
  "errors": [],
  "stats": { "startTime": "2023-01-01T00:00:00.000Z", "duration": 4210.5, "expected": 2 }
}"#;

/// Creates an empty scratch directory for a benchmark's working directory.
pub fn setup_workspace() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Writes a shell script into `dir` and returns a command line running it.
pub fn write_script(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).expect("Failed to write stub script");
    format!("sh '{}'", path.display())
}

/// A script that prints the same two markers on every run.
pub fn constant_marker_script(dir: &Path) -> String {
    write_script(
        dir,
        "constant.sh",
        "echo 'some noise \"duration\": 100, more \"duration\": 200, trailing'\n",
    )
}

/// A script whose durations depend on how many times it has run before,
/// counted in a `count` file inside its working directory.
pub fn counting_script(dir: &Path) -> String {
    write_script(
        dir,
        "counting.sh",
        r#"n=$(cat count 2>/dev/null || echo 0)
echo $((n + 1)) > count
echo "\"duration\": $((n * 10)), \"duration\": $((n + 1)),"
"#,
    )
}

/// A script that omits the marker on its second run only.
pub fn missing_on_second_run_script(dir: &Path) -> String {
    write_script(
        dir,
        "flaky.sh",
        r#"n=$(cat count 2>/dev/null || echo 0)
echo $((n + 1)) > count
if [ "$n" = "1" ]; then
  echo "no timings here"
else
  echo '"duration": 100, "duration": 200,'
fi
"#,
    )
}

/// A one-suite Playwright report listing `(title, duration)` pairs in order.
pub fn playwright_report(tests: &[(&str, u64)]) -> String {
    let specs = tests
        .iter()
        .map(|(title, duration)| {
            format!(
                r#"{{"title":"{title}","tests":[{{"projectName":"","results":[{{"status":"passed","duration":{duration}}}]}}]}}"#
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(r#"{{"suites":[{{"title":"order.spec.ts","specs":[{specs}]}}]}}"#)
}

/// A script that prints `first.json` on its first run and `later.json` afterwards.
pub fn reordering_report_script(dir: &Path, first: &str, later: &str) -> String {
    fs::write(dir.join("first.json"), first).expect("Failed to write first report");
    fs::write(dir.join("later.json"), later).expect("Failed to write later report");
    write_script(
        dir,
        "reorder.sh",
        r#"n=$(cat count 2>/dev/null || echo 0)
echo $((n + 1)) > count
if [ "$n" = "0" ]; then cat first.json; else cat later.json; fi
"#,
    )
}

/// Reads the run counter written by the counting scripts.
pub fn read_count(dir: &Path) -> usize {
    fs::read_to_string(dir.join("count"))
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

/// A config running `command` `trials` times inside `dir`.
pub fn config_for(dir: &Path, command: String, trials: usize) -> BenchConfig {
    BenchConfig {
        trials,
        working_dir: dir.to_path_buf(),
        command,
        ..BenchConfig::default()
    }
}

/// Writes a TOML config file into `dir` and returns its path.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("Bench.toml");
    fs::write(&path, content).expect("Failed to write Bench.toml");
    path
}
