//! Prints log records, including the decorated messages of gamelog, to a terminal.
//!
//! Records produced by gamelog's sinks carry inline markup. In a rich console the markup is
//! turned into ANSI styles, in a plain console it is stripped.

use colored::Colorize;
use fern::FormatCallback;
use gamelog_core::markup::{self, MarkupStyle};
use gamelog_core::sink::LOG_TARGET;
use log::{Level, Record};
use std::fmt;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

pub mod opts;

pub use opts::{ConsoleMode, LoggingOpts};

static TIME_FORMAT: &[FormatItem] =
    format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

pub(crate) fn message_format(
    rich: bool,
    timestamps: bool,
) -> impl Fn(FormatCallback, &fmt::Arguments, &Record) + Sync + Send + 'static {
    move |out, _message, record| {
        out.finish(format_args!("{}", format_record(record, rich, timestamps)))
    }
}

/// Formats a record as a single line of terminal output.
pub fn format_record(record: &Record, rich: bool, timestamps: bool) -> String {
    let prefix = format_prefix(record, timestamps);
    let message = record.args().to_string();
    let message = if record.target() == LOG_TARGET {
        let style = if rich {
            MarkupStyle::Ansi
        } else {
            MarkupStyle::Strip
        };
        markup::render(&message, style)
    } else {
        message
    };
    format!("{} {}", prefix, message)
}

fn format_prefix(record: &Record, timestamps: bool) -> String {
    let mut level_string = match record.level() {
        Level::Warn => "warning".to_string(),
        level => level.to_string().to_lowercase(),
    };

    level_string = match record.level() {
        Level::Error => level_string.red().to_string(),
        Level::Warn => level_string.yellow().to_string(),
        Level::Info => level_string.green().to_string(),
        Level::Debug => level_string.blue().to_string(),
        Level::Trace => level_string.bright_black().to_string(),
    };

    if timestamps {
        let time = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let time = time.format(TIME_FORMAT).unwrap_or_default();
        format!("[{}] {}:", time, level_string)
    } else {
        format!("{}:", level_string)
    }
}
