//! CLI entry point for the Forest Night contrast audit.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use forest_night::audit::run_audit;
use forest_night::cli::Cli;
use forest_night::config::AuditSettings;
use forest_night::enumerate::configurations;
use forest_night::logging::init_logging;
use forest_night::report::{OutputFormat, Report};
use forest_night::theme::ForestNight;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let settings = AuditSettings::merged(cli.config.as_deref(), &cli.to_settings_overrides())
        .wrap_err("Failed to load settings")?;

    if let Some(ref path) = cli.save_config {
        settings
            .save(path)
            .wrap_err_with(|| format!("Failed to write settings to {}", path.display()))?;
        eprintln!("Saved settings to {}", path.display());
    }

    // Held until exit so buffered log lines are flushed
    let _guard = settings
        .logging
        .file
        .as_deref()
        .map(|path| init_logging(path, &settings.logging.level));

    let (theme, source) = match settings.theme_dir {
        Some(ref dir) => (ForestNight::from_dir(dir), dir.display().to_string()),
        None => (ForestNight::embedded(), "the embedded tables".to_string()),
    };
    let theme = match theme {
        Ok(theme) => theme,
        Err(err) => {
            eprintln!("Unable to load theme tables from {source}.");
            eprintln!("Fix the theme data files before running the contrast audit.");
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let configs = configurations();
    info!(configurations = configs.len(), %source, "Starting contrast audit");

    let result = run_audit(&theme, &configs);
    let report = Report::new(&result, settings.max_printed);
    info!(
        checks = result.checks,
        skipped = result.skipped.len(),
        failures = result.failures.len(),
        verdict = ?report.verdict,
        "Contrast audit finished"
    );

    match settings.format {
        OutputFormat::Text => {
            let output = report.to_text();
            print!("{}", output.stdout);
            eprint!("{}", output.stderr);
        }
        OutputFormat::Json => {
            let json = report.to_json().wrap_err("Failed to serialize report to JSON")?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = report.to_yaml().wrap_err("Failed to serialize report to YAML")?;
            print!("{yaml}");
        }
    }

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
