use crate::logging;
use atty::Stream;
use fern::Dispatch;
use gamelog_core::{Debugger, DebuggerSettings, SettingsError, Severity};
use log::{LevelFilter, SetLoggerError};
use merge::Merge;
use std::io::stdout;
use std::path::PathBuf;

/// Provides helpful logging args for clap clis
#[derive(Debug, clap::Args, Clone, merge::Merge)]
#[clap(next_help_heading = "Log Level")]
pub struct LoggingOpts {
    /// Only display error level log messages
    #[clap(short, long)]
    #[clap(conflicts_with_all(&["warn", "info", "debug", "trace"]))]
    #[clap(display_order = 1)]
    #[merge(strategy = merge::bool::overwrite_false)]
    error: bool,

    /// Display warning and above level log messages
    #[clap(short, long)]
    #[clap(conflicts_with_all(&["error", "info", "debug", "trace"]))]
    #[clap(display_order = 2)]
    #[merge(strategy = merge::bool::overwrite_false)]
    warn: bool,

    /// Display info and above level log messages
    #[clap(short, long)]
    #[clap(conflicts_with_all(&["error", "warn", "debug", "trace"]))]
    #[clap(display_order = 3)]
    #[merge(strategy = merge::bool::overwrite_false)]
    info: bool,

    /// Display debug and above level log messages
    #[clap(long)]
    #[clap(conflicts_with_all(&["error", "warn", "info", "trace"]))]
    #[clap(display_order = 4)]
    #[merge(strategy = merge::bool::overwrite_false)]
    debug: bool,

    /// Display trace and above level log messages
    #[clap(long)]
    #[clap(conflicts_with_all(&["error", "warn", "info", "debug"]))]
    #[clap(display_order = 5)]
    #[merge(strategy = merge::bool::overwrite_false)]
    trace: bool,

    /// Prefix every line with the local time
    #[clap(long)]
    #[clap(help_heading = "Logging Settings")]
    #[merge(strategy = merge::bool::overwrite_false)]
    pub timestamps: bool,

    /// The console output mode.
    #[clap(long, value_enum, default_value_t = ConsoleMode::Auto)]
    #[clap(help_heading = "Logging Settings")]
    pub console: ConsoleMode,

    /// A settings file that enables or disables categories
    #[clap(long, value_name = "PATH")]
    #[clap(help_heading = "Categories")]
    pub settings: Option<PathBuf>,

    /// Disable info messages of a category
    #[clap(long, value_name = "CATEGORY")]
    #[clap(help_heading = "Categories")]
    #[merge(strategy = merge::vec::append)]
    pub disable_info: Vec<String>,

    /// Disable warning messages of a category
    #[clap(long, value_name = "CATEGORY")]
    #[clap(help_heading = "Categories")]
    #[merge(strategy = merge::vec::append)]
    pub disable_warning: Vec<String>,

    /// Disable error messages of a category
    #[clap(long, value_name = "CATEGORY")]
    #[clap(help_heading = "Categories")]
    #[merge(strategy = merge::vec::append)]
    pub disable_error: Vec<String>,
}

impl Default for LoggingOpts {
    fn default() -> Self {
        Self {
            error: false,
            warn: false,
            info: false,
            debug: false,
            trace: false,
            timestamps: false,
            console: ConsoleMode::Auto,
            settings: None,
            disable_info: vec![],
            disable_warning: vec![],
            disable_error: vec![],
        }
    }
}

#[derive(Debug, Copy, Clone, clap::ValueEnum, Eq, PartialEq)]
#[repr(u8)]
pub enum ConsoleMode {
    Auto,
    Rich,
    Plain,
}

impl Merge for ConsoleMode {
    fn merge(&mut self, other: Self) {
        if self == &Self::Auto {
            *self = other;
        }
    }
}

impl ConsoleMode {
    pub fn resolve(self) -> Self {
        match self {
            ConsoleMode::Auto if atty::is(Stream::Stdout) => ConsoleMode::Rich,
            ConsoleMode::Auto => ConsoleMode::Plain,
            explicit => explicit,
        }
    }
}

impl LoggingOpts {
    /// Gets the log level
    pub fn log_level_filter(&self) -> LevelFilter {
        if self.error {
            LevelFilter::Error
        } else if self.warn {
            LevelFilter::Warn
        } else if self.info {
            LevelFilter::Info
        } else if self.debug {
            LevelFilter::Debug
        } else if self.trace {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        }
    }

    /// The categories disabled on the command line for a severity
    pub fn disabled_categories(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::Info => &self.disable_info,
            Severity::Warning => &self.disable_warning,
            Severity::Error => &self.disable_error,
        }
    }

    /// Installs a terminal logger as the root logger of the `log` crate.
    pub fn init_root_logger(&self) -> Result<(), SetLoggerError> {
        self.create_logger().apply()
    }

    /// Builds the terminal logger without installing it. Styling is forced on or off to match
    /// the resolved console mode, whether or not stdout is a terminal.
    pub fn create_logger(&self) -> Dispatch {
        let rich = matches!(self.console.resolve(), ConsoleMode::Rich);
        colored::control::set_override(rich);
        Dispatch::new()
            .level(self.log_level_filter())
            .format(logging::message_format(rich, self.timestamps))
            .chain(stdout())
    }

    /// Applies the settings file, then the categories disabled on the command line.
    pub fn apply_to(&self, debugger: &Debugger) -> Result<(), SettingsError> {
        if let Some(path) = &self.settings {
            DebuggerSettings::from_path(path)?.apply(debugger);
        }
        for severity in Severity::ALL {
            for category in self.disabled_categories(severity) {
                debugger.disable_category(severity, category);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Cli {
        #[clap(flatten)]
        logging: LoggingOpts,
    }

    #[test]
    fn parse_level_flags() {
        let cli = Cli::parse_from(["test", "--warn"]);
        assert_eq!(cli.logging.log_level_filter(), LevelFilter::Warn);

        let cli = Cli::parse_from(["test"]);
        assert_eq!(cli.logging.log_level_filter(), LevelFilter::Info);
        assert_eq!(cli.logging.console, ConsoleMode::Auto);

        assert!(Cli::try_parse_from(["test", "--warn", "--error"]).is_err());
    }

    #[test]
    fn parse_disabled_categories() {
        let cli = Cli::parse_from([
            "test",
            "--disable-info",
            "Physics",
            "--disable-info",
            "AI",
            "--disable-error",
            "Net",
            "--console",
            "plain",
        ]);
        assert_eq!(
            cli.logging.disabled_categories(Severity::Info),
            &["Physics".to_string(), "AI".to_string()]
        );
        assert!(cli.logging.disabled_categories(Severity::Warning).is_empty());
        assert_eq!(cli.logging.console, ConsoleMode::Plain);
    }

    #[test]
    fn merge_keeps_explicit_values() {
        let mut opts = LoggingOpts {
            console: ConsoleMode::Auto,
            disable_info: vec!["A".to_string()],
            ..Default::default()
        };
        opts.merge(LoggingOpts {
            console: ConsoleMode::Plain,
            timestamps: true,
            disable_info: vec!["B".to_string()],
            ..Default::default()
        });
        assert_eq!(opts.console, ConsoleMode::Plain);
        assert!(opts.timestamps);
        assert_eq!(opts.disable_info, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn explicit_modes_resolve_to_themselves() {
        assert_eq!(ConsoleMode::Rich.resolve(), ConsoleMode::Rich);
        assert_eq!(ConsoleMode::Plain.resolve(), ConsoleMode::Plain);
        assert_ne!(ConsoleMode::Auto.resolve(), ConsoleMode::Auto);
    }

    #[test]
    fn rich_console_styles_output_off_a_terminal() {
        let _guard = logging::tests::COLOR_OVERRIDE.lock();
        let opts = LoggingOpts {
            console: ConsoleMode::Rich,
            ..Default::default()
        };
        let _dispatch = opts.create_logger();

        let line = logging::format_record(
            &log::Record::builder()
                .target(gamelog_core::sink::LOG_TARGET)
                .level(log::Level::Info)
                .args(format_args!("<color=#FF0000>red</color>"))
                .build(),
            true,
            false,
        );
        assert!(line.contains("\x1b["), "no escape sequence in {:?}", line);
        assert!(!line.contains("<color"));
        assert!(line.contains("red"));
    }

    #[test]
    fn plain_console_disables_styling() {
        let _guard = logging::tests::COLOR_OVERRIDE.lock();
        let opts = LoggingOpts {
            console: ConsoleMode::Plain,
            ..Default::default()
        };
        let _dispatch = opts.create_logger();

        let line = logging::format_record(
            &log::Record::builder()
                .target(gamelog_core::sink::LOG_TARGET)
                .level(log::Level::Info)
                .args(format_args!("<b>bold</b>"))
                .build(),
            false,
            false,
        );
        assert_eq!(line, "info: bold");
    }

    #[test]
    fn apply_disables_categories() {
        let debugger = Debugger::new(gamelog_core::Sinks::discard());
        let opts = LoggingOpts {
            disable_warning: vec!["Audio".to_string()],
            ..Default::default()
        };
        opts.apply_to(&debugger).unwrap();
        assert!(!debugger.is_enabled(Severity::Warning, "Audio"));
        assert!(debugger.is_enabled(Severity::Info, "Audio"));
    }

    #[test]
    fn apply_reads_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gamelog.toml");
        std::fs::write(&path, "[error]\ndisabled = [\"Net\"]\n").unwrap();

        let debugger = Debugger::new(gamelog_core::Sinks::discard());
        let opts = LoggingOpts {
            settings: Some(path),
            disable_error: vec!["Disk".to_string()],
            ..Default::default()
        };
        opts.apply_to(&debugger).unwrap();
        assert!(!debugger.is_enabled(Severity::Error, "Net"));
        assert!(!debugger.is_enabled(Severity::Error, "Disk"));
        assert!(debugger.is_enabled(Severity::Error, "Render"));
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        let debugger = Debugger::new(gamelog_core::Sinks::discard());
        let opts = LoggingOpts {
            settings: Some(PathBuf::from("/definitely/not/here/gamelog.toml")),
            ..Default::default()
        };
        assert!(matches!(
            opts.apply_to(&debugger),
            Err(SettingsError::Read { .. })
        ));
    }
}
