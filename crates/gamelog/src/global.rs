//! The process wide debugger used by the logging macros.
//!
//! The debugger is created with empty category tables the first time it is used and lives for the
//! rest of the process.

use gamelog_core::{Color, Console, ConsoleError, Debugger, Severity, Sink, Sinks};
use once_cell::sync::Lazy;
use std::sync::Arc;

static DEBUGGER: Lazy<Debugger> = Lazy::new(Debugger::default);

/// Gets the process wide debugger
pub fn debugger() -> &'static Debugger {
    &DEBUGGER
}

/// Checks whether a category is enabled for a severity, declaring it if it was never seen.
pub fn is_enabled(severity: Severity, category: &str) -> bool {
    DEBUGGER.is_enabled(severity, category)
}

pub fn enable_info_category(category: &str) {
    DEBUGGER.enable_info_category(category);
}

pub fn disable_info_category(category: &str) {
    DEBUGGER.disable_info_category(category);
}

pub fn enable_warning_category(category: &str) {
    DEBUGGER.enable_warning_category(category);
}

pub fn disable_warning_category(category: &str) {
    DEBUGGER.disable_warning_category(category);
}

pub fn enable_error_category(category: &str) {
    DEBUGGER.enable_error_category(category);
}

pub fn disable_error_category(category: &str) {
    DEBUGGER.disable_error_category(category);
}

/// Enables every category that has been declared so far
pub fn enable_all() {
    DEBUGGER.enable_all();
}

/// Disables every category that has been declared so far. Categories declared afterwards still
/// start out enabled.
pub fn disable_all() {
    DEBUGGER.disable_all();
}

/// Sets the default decoration color. The color is only stored; callers decide when to use it.
pub fn set_default_decoration_color(color: Color) {
    DEBUGGER.set_default_color(color);
}

pub fn default_decoration_color() -> Color {
    DEBUGGER.default_color()
}

/// Clears the console of the host.
///
/// # Error
/// Errors if the process is not attached to a console that can be cleared.
pub fn clear_console() -> Result<(), ConsoleError> {
    DEBUGGER.clear_console()
}

pub fn set_sinks(sinks: Sinks) {
    DEBUGGER.set_sinks(sinks);
}

pub fn set_sink(severity: Severity, sink: Arc<dyn Sink>) {
    DEBUGGER.set_sink(severity, sink);
}

pub fn set_console(console: Console) {
    DEBUGGER.set_console(console);
}

/// Forgets every declared category and restores the default decoration color.
pub fn reset() {
    DEBUGGER.reset();
}
