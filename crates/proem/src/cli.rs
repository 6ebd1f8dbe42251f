use anyhow::Result;
use clap::{Parser, ValueEnum};
use proem_core::layout::Align;
use proem_core::proem::{Proem, Spacing, DEFAULT_BORDER_CHAR, DEFAULT_BORDER_COLOR, DEFAULT_WIDTH};

/// CLI-facing alignment enum (value_enum for clap) to map into the core
/// alignment
///
/// Alignment is validated strictly at the argument parser: an unrecognized
/// value is a usage error listing the allowed names. Color names are looser
/// on purpose and stay plain strings (see `--border-color`).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AlignOption {
    /// Text against the left border with one space of margin
    Left,
    /// Text centered between the borders
    Center,
    /// Text against the right border with one space of margin
    Right,
}

impl From<AlignOption> for Align {
    fn from(align: AlignOption) -> Self {
        match align {
            AlignOption::Left => Align::Left,
            AlignOption::Center => Align::Center,
            AlignOption::Right => Align::Right,
        }
    }
}

/// Log format options
#[derive(Debug, Clone, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format
    Text,
    /// JSON structured format
    Json,
}

/// Log level options
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Informational messages and above
    Info,
    /// Debug messages and above
    Debug,
    /// All messages including trace
    Trace,
}

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version,
    about = "Render a bordered startup banner for a CLI application",
    long_about = "Render a bordered startup banner for a CLI application\n\n\
        Prints a colored box with the application title and optional tagline, \
        version, repository URL, and description. The banner goes to stdout; \
        warnings about degraded options go to stderr.",
    color = clap::ColorChoice::Auto
)]
pub struct Cli {
    /// Application name shown in the banner
    pub title: String,

    /// Short tagline shown directly under the title
    #[arg(long, value_name = "TEXT")]
    pub tagline: Option<String>,

    /// Version string to display
    #[arg(long, value_name = "TEXT")]
    pub app_version: Option<String>,

    /// Repository URL to display
    #[arg(long, value_name = "URL")]
    pub repo_url: Option<String>,

    /// Long description, wrapped to fit the box
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Box width in border positions; zero or less means the terminal width
    #[arg(long, value_name = "COLS", default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: i32,

    /// Border glyph (may be more than one character)
    #[arg(long, value_name = "GLYPH", default_value = DEFAULT_BORDER_CHAR)]
    pub border_char: String,

    /// Border color: black, red, green, yellow, blue, magenta, cyan or white.
    /// An unknown name logs a warning and renders without color.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_BORDER_COLOR)]
    pub border_color: String,

    /// Render without color escape sequences
    #[arg(long)]
    pub no_color: bool,

    /// Description alignment (other fields are always centered)
    #[arg(long, value_enum, default_value = "left")]
    pub align: AlignOption,

    /// Render field groups back to back without blank separator lines
    #[arg(long)]
    pub compact: bool,

    /// Log format (text or json, defaults to text, can be set via PROEM_LOG_FORMAT env var)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Cli {
    /// Initialize logging, build the banner from the parsed flags, and
    /// print it to stdout.
    pub fn run(self) -> Result<()> {
        let log_format = match self.log_format {
            Some(LogFormat::Text) => Some("text"),
            Some(LogFormat::Json) => Some("json"),
            None => None, // Let logging module check environment variable
        };

        let log_level = match self.log_level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        // Set environment variable for log level before initializing logging
        if std::env::var_os("PROEM_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
            std::env::set_var(
                "RUST_LOG",
                format!("proem={},proem_core={}", log_level, log_level),
            );
        }
        proem_core::logging::init(log_format)?;

        tracing::debug!("CLI initialized with log level: {}", log_level);

        // One-time platform setup before any styled output is written
        proem_core::term::ensure_ansi();

        let mut builder = Proem::builder(self.title)
            .width(self.width)
            .border_char(self.border_char)
            .align(self.align.into());

        if let Some(tagline) = self.tagline {
            builder = builder.tagline(tagline);
        }
        if let Some(version) = self.app_version {
            builder = builder.version(version);
        }
        if let Some(repo_url) = self.repo_url {
            builder = builder.repo_url(repo_url);
        }
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        builder = if self.no_color {
            builder.no_color()
        } else {
            builder.border_color(self.border_color)
        };
        if self.compact {
            builder = builder.spacing(Spacing::Compact);
        }

        let proem = builder.build()?;
        // The rendered banner already ends with a newline.
        print!("{}", proem.render());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_invocation() {
        let cli = Cli::try_parse_from(["proem", "my-app"]).unwrap();
        assert_eq!(cli.title, "my-app");
        assert_eq!(cli.width, 80);
        assert_eq!(cli.border_char, "#");
        assert_eq!(cli.border_color, "magenta");
        assert!(!cli.no_color);
        assert!(!cli.compact);
        assert!(matches!(cli.align, AlignOption::Left));
    }

    #[test]
    fn test_parse_all_banner_flags() {
        let cli = Cli::try_parse_from([
            "proem",
            "my-app",
            "--tagline",
            "a tool",
            "--app-version",
            "1.2.3",
            "--repo-url",
            "https://example.com/my-app",
            "--description",
            "does things",
            "--width",
            "60",
            "--border-char",
            "*",
            "--border-color",
            "cyan",
            "--align",
            "right",
            "--compact",
        ])
        .unwrap();
        assert_eq!(cli.tagline.as_deref(), Some("a tool"));
        assert_eq!(cli.app_version.as_deref(), Some("1.2.3"));
        assert_eq!(cli.repo_url.as_deref(), Some("https://example.com/my-app"));
        assert_eq!(cli.description.as_deref(), Some("does things"));
        assert_eq!(cli.width, 60);
        assert_eq!(cli.border_char, "*");
        assert_eq!(cli.border_color, "cyan");
        assert!(matches!(cli.align, AlignOption::Right));
        assert!(cli.compact);
    }

    #[test]
    fn test_parse_negative_width_for_auto_detection() {
        let cli = Cli::try_parse_from(["proem", "my-app", "--width", "-1"]).unwrap();
        assert_eq!(cli.width, -1);
    }

    #[test]
    fn test_missing_title_is_a_usage_error() {
        assert!(Cli::try_parse_from(["proem"]).is_err());
    }

    #[test]
    fn test_invalid_align_is_a_usage_error() {
        let result = Cli::try_parse_from(["proem", "my-app", "--align", "diagonal"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_color_is_not_a_usage_error() {
        // Color degrades at build time instead of failing at the parser.
        let cli = Cli::try_parse_from(["proem", "my-app", "--border-color", "neon"]).unwrap();
        assert_eq!(cli.border_color, "neon");
    }

    #[test]
    fn test_align_option_maps_to_core() {
        assert_eq!(Align::from(AlignOption::Left), Align::Left);
        assert_eq!(Align::from(AlignOption::Center), Align::Center);
        assert_eq!(Align::from(AlignOption::Right), Align::Right);
    }
}
