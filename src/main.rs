//! ts - Render tag markup as styled terminal text.
//!
//! This binary provides the CLI interface to the tagstyle library,
//! reading markup from files or stdin.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::io::{self, Read, Write};

use tagstyle_config::Config;
use tagstyle_core::{Result, Width};
use tagstyle_render::Styler;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("tagstyle v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("ts: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// What to do with each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Format,
    Unformat,
    Split,
}

impl Mode {
    fn from_cli(cli: &Cli) -> Self {
        if cli.split {
            Mode::Split
        } else if cli.unformat {
            Mode::Unformat
        } else {
            Mode::Format
        }
    }
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let styler = build_styler(cli, &config)?;
    let width = cli.effective_width(config.width()?)?;
    let mode = Mode::from_cli(cli);
    debug!("mode {:?}, width {:?}", mode, width);

    let mut stdout = io::stdout().lock();
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        stdout.write_all(process(&styler, &input, width, mode)?.as_bytes())?;
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let input = std::fs::read_to_string(path)?;
            stdout.write_all(process(&styler, &input, width, mode)?.as_bytes())?;
        }
    }
    stdout.flush()?;
    Ok(())
}

/// Load configuration with optional overrides.
///
/// A broken default config file is reported and skipped; a broken
/// `--config` is an error.
fn load_config(cli: &Cli) -> Result<Config> {
    Config::load_with_override(cli.config.as_deref())
}

fn build_styler(cli: &Cli, config: &Config) -> Result<Styler> {
    let mut styler = Styler::from_config(config)?;
    if let Some(ref name) = cli.formatter {
        styler.set_formatter(name)?;
    }
    Ok(styler)
}

fn process(styler: &Styler, input: &str, width: Width, mode: Mode) -> Result<String> {
    match mode {
        Mode::Format => styler.format(input, width.as_option()),
        Mode::Unformat => styler.unformat(input),
        Mode::Split => Ok(styler.split(input, width.as_option())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_styler(args: &[&str]) -> (Styler, Cli) {
        let cli = Cli::parse_from(args);
        let styler = build_styler(&cli, &Config::default()).unwrap();
        (styler, cli)
    }

    #[test]
    fn test_mode_from_cli() {
        assert_eq!(Mode::from_cli(&Cli::parse_from(["ts"])), Mode::Format);
        assert_eq!(Mode::from_cli(&Cli::parse_from(["ts", "--unformat"])), Mode::Unformat);
        assert_eq!(Mode::from_cli(&Cli::parse_from(["ts", "--split"])), Mode::Split);
    }

    #[test]
    fn test_default_formatter_is_ansi() {
        let (styler, _) = make_styler(&["ts"]);
        let out = process(&styler, "<error>x</error>", Width::Unbounded, Mode::Format).unwrap();
        assert_eq!(out, "\x1b[97;41mx\x1b[0m");
    }

    #[test]
    fn test_formatter_flag() {
        let (styler, _) = make_styler(&["ts", "-f", "text"]);
        let out = process(&styler, "<error>x</error>\n", Width::Unbounded, Mode::Format).unwrap();
        assert_eq!(out, "x\n");
    }

    #[test]
    fn test_unknown_formatter_flag() {
        let cli = Cli::parse_from(["ts", "-f", "html"]);
        assert!(build_styler(&cli, &Config::default()).is_err());
    }

    #[test]
    fn test_inline_config_flag() {
        let cli = Cli::parse_from(["ts", "-c", "[output]\nFormatter = \"plain\"\nWidth = 3"]);
        let config = load_config(&cli).unwrap();
        let styler = build_styler(&cli, &config).unwrap();
        let out = process(&styler, "<info>abcd</info>", config.width().unwrap(), Mode::Format).unwrap();
        assert_eq!(out, "abc\nd");
    }

    #[test]
    fn test_broken_config_flag() {
        let cli = Cli::parse_from(["ts", "-c", "[output"]);
        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn test_split_mode() {
        let (styler, _) = make_styler(&["ts"]);
        let out = process(&styler, "<info>abcd</info>", Width::Columns(2), Mode::Split).unwrap();
        assert_eq!(out, "<info>ab</info>\n<info>cd</info>");
    }

    #[test]
    fn test_unformat_mode() {
        let (styler, _) = make_styler(&["ts"]);
        let out = process(&styler, "\x1b[31mred\x1b[0m", Width::Unbounded, Mode::Unformat).unwrap();
        assert_eq!(out, "red");
    }
}
