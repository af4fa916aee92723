//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{Context, Result};

use pisweep_cli::output::{write_to_file, SweepReport};
use pisweep_cli::prompt_intervals;
use pisweep_cli::CLIResultPresenter;
use pisweep_orchestration::analysis::analyze_sweep;
use pisweep_orchestration::interfaces::{
    CompositeObserver, ResultPresenter, TrialObserver, TrialOutcome,
};
use pisweep_orchestration::observers::LoggingObserver;
use pisweep_orchestration::sweep::run_sweep_with_observer;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        pisweep_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let presenter = CLIResultPresenter::stdout();
    let result = match config.intervals {
        Some(n) => Ok(n),
        None => read_intervals(),
    }
    .and_then(|intervals| run_cli(config, intervals, &presenter).map(drop));

    if let Err(e) = &result {
        presenter.present_error(&format!("{e:#}"));
    }
    result
}

fn read_intervals() -> Result<u64> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut err = io::stderr();
    Ok(prompt_intervals(&mut input, &mut out, &mut err)?)
}

/// Run the sweep for `intervals`, reporting each trial through `presenter`.
pub fn run_cli<W: Write + Send>(
    config: &AppConfig,
    intervals: u64,
    presenter: &CLIResultPresenter<W>,
) -> Result<Vec<TrialOutcome>> {
    let opts = config.sweep_options();
    let logging = LoggingObserver;
    let observer = CompositeObserver::new(vec![presenter as &dyn TrialObserver, &logging]);

    let outcomes = run_sweep_with_observer(intervals, &opts, &observer)?;

    let summary = if config.summary || config.output.is_some() {
        Some(analyze_sweep(&outcomes)?)
    } else {
        None
    };

    if config.summary {
        if let Some(summary) = &summary {
            presenter.present_summary(summary);
        }
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        let report = SweepReport {
            intervals,
            dispatch: opts.dispatch,
            clamp_last_range: opts.clamp_last_range,
            trials: &outcomes,
            summary,
        };
        write_to_file(path, &report)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("pisweep").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn run_cli_reports_every_trial() {
        let presenter = CLIResultPresenter::new(Vec::new());
        let outcomes = run_cli(&config(&["--max-workers", "4"]), 1_000, &presenter).unwrap();
        assert_eq!(outcomes.len(), 4);

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        for w in 1..=4 {
            assert!(text.contains(&format!("Liczba wątków: {w}\n")));
        }
        assert!(!text.contains("Podsumowanie"));
    }

    #[test]
    fn run_cli_with_summary() {
        let presenter = CLIResultPresenter::new(Vec::new());
        run_cli(&config(&["--max-workers", "3", "--summary"]), 500, &presenter).unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(text.contains("Podsumowanie (3 prób):"));
    }

    #[test]
    fn run_cli_writes_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sweep.json");
        let path_str = path.to_str().unwrap();
        let presenter = CLIResultPresenter::new(Vec::new());
        run_cli(
            &config(&["--max-workers", "2", "--dispatch", "pool", "-o", path_str]),
            1,
            &presenter,
        )
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["intervals"], 1);
        assert_eq!(json["dispatch"], "pool");
        assert_eq!(json["trials"].as_array().unwrap().len(), 2);
        assert_eq!(json["trials"][0]["estimate"], 4.0);
        assert_eq!(json["summary"]["trials"], 2);
    }

    #[test]
    fn run_cli_bad_output_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("sweep.json");
        let presenter = CLIResultPresenter::new(Vec::new());
        let result = run_cli(
            &config(&["--max-workers", "1", "-o", path.to_str().unwrap()]),
            10,
            &presenter,
        );
        assert!(result.is_err());
    }
}
