//! Command-line interface for tagstyle.

use clap::Parser;
use std::path::PathBuf;
use tagstyle_core::{Result, Width};

/// ts - Render tag markup for the terminal.
///
/// Reads text containing `<cs ...>` and named style tags, wraps it to a
/// width and prints it through a formatter.
#[derive(Parser, Debug)]
#[command(
    name = "ts",
    author = "Tagstyle Contributors",
    version,
    about = "Render tag markup as styled terminal text",
    after_help = "Repository: https://github.com/tagstyle/tagstyle-rs\n\n\
                  Examples:\n  \
                  echo '<cs color=\"red\">alert</cs>' | ts\n  \
                  ts -w 40 notes.txt\n  \
                  ts --fit -f plain notes.txt\n  \
                  ts -c '[tags.note]\\nbold = true' notes.txt"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Formatter to use (ansi, cli, plain, text, raw)
    #[arg(short = 'f', long = "formatter")]
    pub formatter: Option<String>,

    /// Wrap lines at this many characters (0 = never break lines)
    #[arg(short = 'w', long = "width", allow_hyphen_values = true, conflicts_with = "fit")]
    pub width: Option<isize>,

    /// Wrap lines at the terminal width
    #[arg(long = "fit")]
    pub fit: bool,

    /// Strip the formatter's styling from the input instead of adding it
    #[arg(long = "unformat", conflicts_with = "split")]
    pub unformat: bool,

    /// Print the split markup instead of formatting it
    #[arg(long = "split")]
    pub split: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Width to format at, given the configured one.
    ///
    /// `--fit` wins over `--width`, which wins over the configuration.
    pub fn effective_width(&self, configured: Width) -> Result<Width> {
        if self.fit {
            let columns = crossterm::terminal::size()
                .map(|(cols, _)| cols as usize)
                .unwrap_or(80);
            return Ok(Width::from(columns));
        }
        match self.width {
            Some(width) => Width::strict(Some(width)),
            None => Ok(configured),
        }
    }

    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use tagstyle_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["ts"]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.width, None);
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.fit && !cli.unformat && !cli.split);
        assert!(cli.should_read_stdin());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "ts",
            "-w", "40",
            "-f", "plain",
            "-l", "debug",
            "--split",
            "notes.txt",
        ]);
        assert_eq!(cli.width, Some(40));
        assert_eq!(cli.formatter.as_deref(), Some("plain"));
        assert_eq!(cli.log_level, "debug");
        assert!(cli.split);
        assert_eq!(cli.files, vec![PathBuf::from("notes.txt")]);
        assert!(!cli.should_read_stdin());
    }

    #[test]
    fn test_width_overrides_config() {
        let cli = Cli::parse_from(["ts", "-w", "0"]);
        assert_eq!(cli.effective_width(Width::Columns(20)).unwrap(), Width::Segments);

        let cli = Cli::parse_from(["ts"]);
        assert_eq!(cli.effective_width(Width::Columns(20)).unwrap(), Width::Columns(20));
    }

    #[test]
    fn test_negative_width_is_rejected() {
        let cli = Cli::parse_from(["ts", "-w", "-3"]);
        assert_eq!(cli.width, Some(-3));
        assert!(cli.effective_width(Width::Unbounded).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_fit_conflicts_with_width() {
        assert!(Cli::try_parse_from(["ts", "--fit", "-w", "10"]).is_err());
    }
}
