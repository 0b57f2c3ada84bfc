//! # gamelog
//!
//! Category gated, decorated debug logging for games.
//!
//! Messages are logged on one of three severities. Every severity keeps its own table of
//! categories, and a category logs until it is disabled, even if it has never been mentioned
//! before:
//!
//! ```
//! use gamelog::{log_error, log_info, Decoration};
//!
//! gamelog::disable_info_category("Physics");
//!
//! log_info!("collision resolved", "Physics"); // dropped
//! log_error!("collision failed", "Physics", [Decoration::BOLD]); // logged
//! ```
//!
//! The logging macros can be compiled out entirely by disabling the default `enabled` feature.
//! The category toggles stay available either way.

mod global;
pub mod logging;
mod macros;

pub use gamelog_core::{color, console, decoration, error, markup, registry, settings, sink};
pub use gamelog_core::{
    apply_decorations, bold, italic, Color, Console, ConsoleController, ConsoleError, Debugger,
    DebuggerSettings, Decoration, Severity, Sink, Sinks, DEFAULT_CATEGORY,
};
pub use global::*;
