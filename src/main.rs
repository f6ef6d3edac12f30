use anyhow::Context;
use clap::Parser;
use small_scripts::core::ConfigProvider;
use small_scripts::utils::error::ErrorSeverity;
use small_scripts::utils::{logger, validation::Validate};
use small_scripts::config::cli::run_local_report;
use small_scripts::{CliConfig, TomlConfig};
use std::io::{BufRead, Write};

fn main() -> anyhow::Result<()> {
    let mut cli = CliConfig::parse();

    // 載入 TOML 配置 (可選)
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let verbose = cli.verbose || file_config.as_ref().is_some_and(|c| c.verbose());
    if cli.log_json || file_config.as_ref().is_some_and(|c| c.json_logs()) {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting age-report");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let configured_input = cli
        .file
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.input.path.clone()));
    let input = match configured_input {
        Some(path) => path,
        None => prompt_for_filename()?,
    };

    cli.file = Some(input);

    match file_config {
        Some(mut config) => {
            config.apply_cli(&cli);
            run_report(config)
        }
        None => run_report(cli),
    }
}

fn prompt_for_filename() -> anyhow::Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "Enter the filename to read: ")?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read the filename from stdin")?;
    Ok(line.trim().to_string())
}

fn run_report<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run_local_report(config, &mut out) {
        Ok(None) => tracing::info!("Input file not found, nothing to report"),
        Ok(Some(summary)) => {
            tracing::info!(
                "✅ Reported {} records (input error: {})",
                summary.records,
                summary.input_error.is_some()
            );
            for path in &summary.exported {
                writeln!(out, "📁 Report exported to: {}", path)?;
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Age report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
