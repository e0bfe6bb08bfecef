//! inkcalc - Entry Point

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use inkcalc::config::{self, CliOverrides};
use inkcalc::counter::UsageCounter;
use inkcalc::form::{self, CalculatorForm};
use inkcalc::model::{AppError, PaperFormat};
use inkcalc::shell;

/// inkcalc - how much ink to mix for a print run
#[derive(Parser, Debug)]
#[command(name = "inkcalc")]
#[command(version)]
#[command(about = "Ink mixing calculator for print runs")]
pub struct Args {
    /// Print run (number of sheets, 1 to 1000000)
    #[arg(short, long)]
    pub quantity: Option<String>,

    /// Ink coverage percentage (1 to 100)
    #[arg(short, long)]
    pub coverage: Option<String>,

    /// Paper format
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<PaperFormat>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the usage counter record
    #[arg(long)]
    pub counter_file: Option<PathBuf>,

    /// Path to the log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// One-shot mode when either numeric field is given on the command line.
    fn is_one_shot(&self) -> bool {
        self.quantity.is_some() || self.coverage.is_some()
    }
}

fn parse_format(raw: &str) -> Result<PaperFormat, String> {
    raw.parse().map_err(|_| format!("expected A3 or A4, got {raw:?}"))
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(
            with_env,
            CliOverrides {
                counter_path: args.counter_file.clone(),
                log_file_path: args.log_file.clone(),
                default_format: args.format,
            },
        )
    };

    inkcalc::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let usage_count = UsageCounter::new(&config.counter_path).increment_and_get();
    info!(usage_count, "Usage counter updated");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", form::window_title(usage_count))?;

    let mut calculator = CalculatorForm::with_format(config.default_format);

    if args.is_one_shot() {
        calculator.set_quantity(args.quantity.unwrap_or_default());
        let view = calculator.set_coverage(args.coverage.unwrap_or_default());
        shell::write_view(&mut out, &view)?;
        return Ok(());
    }

    shell::run(&mut calculator, io::stdin().lock(), out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["inkcalc", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["inkcalc", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["inkcalc"]);
        assert_eq!(args.quantity, None);
        assert_eq!(args.coverage, None);
        assert_eq!(args.format, None);
        assert_eq!(args.config, None);
        assert_eq!(args.counter_file, None);
        assert_eq!(args.log_file, None);
        assert!(!args.is_one_shot());
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["inkcalc", "-q", "1000", "-c", "50", "-f", "a4"]);
        assert_eq!(args.quantity.as_deref(), Some("1000"));
        assert_eq!(args.coverage.as_deref(), Some("50"));
        assert_eq!(args.format, Some(PaperFormat::A4));
        assert!(args.is_one_shot());
    }

    #[test]
    fn test_numeric_fields_are_not_validated_by_clap() {
        // Range checks belong to the engine so the fixed message is shown.
        let args = Args::parse_from(["inkcalc", "--quantity", "0"]);
        assert_eq!(args.quantity.as_deref(), Some("0"));
    }

    #[test]
    fn test_format_invalid_rejects() {
        let result = Args::try_parse_from(["inkcalc", "--format", "A5"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_path_flags() {
        let args = Args::parse_from([
            "inkcalc",
            "--config",
            "/custom/config.toml",
            "--counter-file",
            "/tmp/count.json",
            "--log-file",
            "/tmp/inkcalc.log",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(args.counter_file, Some(PathBuf::from("/tmp/count.json")));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/inkcalc.log")));
    }
}
