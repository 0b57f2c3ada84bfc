//! The [`Debugger`] ties the registry, decorations and sinks together.

use crate::color::Color;
use crate::console::Console;
use crate::decoration::{apply_decorations, Decoration};
use crate::error::ConsoleError;
use crate::registry::CategoryRegistry;
use crate::severity::Severity;
use crate::sink::{Sink, Sinks};
use parking_lot::{Mutex, RwLock};
use std::fmt::Display;
use std::sync::Arc;

/// The category used when a message is logged without one
pub const DEFAULT_CATEGORY: &str = "Default";

/// Routes messages through the category gate of their severity, decorates them, and hands them to
/// the severity's sink.
///
/// # Example
/// ```
/// # use gamelog_core::{Debugger, Decoration, Sinks};
/// # use gamelog_core::sink::MemorySink;
/// # use std::sync::Arc;
/// let memory = Arc::new(MemorySink::new());
/// let debugger = Debugger::new(Sinks::uniform(memory.clone()));
///
/// debugger.disable_warning_category("Audio");
/// debugger.warning_in("clipping", "Audio", &[]);
/// debugger.info_in("spawned", "AI", &[Decoration::BOLD]);
///
/// assert_eq!(memory.messages(), vec!["<b>spawned</b>".to_string()]);
/// ```
#[derive(Debug)]
pub struct Debugger {
    registry: Mutex<CategoryRegistry>,
    sinks: RwLock<Sinks>,
    default_color: RwLock<Color>,
    console: RwLock<Arc<Console>>,
}

impl Default for Debugger {
    /// A debugger that logs through the `log` crate and clears the attached terminal
    fn default() -> Self {
        Self::new(Sinks::default())
    }
}

impl Debugger {
    /// Creates a debugger with no declared categories
    pub fn new(sinks: Sinks) -> Self {
        Self::with_console(sinks, Console::default())
    }

    pub fn with_console(sinks: Sinks, console: Console) -> Self {
        Self {
            registry: Mutex::new(CategoryRegistry::new()),
            sinks: RwLock::new(sinks),
            default_color: RwLock::new(Color::default()),
            console: RwLock::new(Arc::new(console)),
        }
    }

    /// Checks whether a category is enabled for a severity, declaring it if needed.
    pub fn is_enabled(&self, severity: Severity, category: &str) -> bool {
        self.registry.lock().is_enabled(severity, category)
    }

    pub fn enable_category(&self, severity: Severity, category: &str) {
        self.registry.lock().enable(severity, category);
    }

    pub fn disable_category(&self, severity: Severity, category: &str) {
        self.registry.lock().disable(severity, category);
    }

    pub fn enable_info_category(&self, category: &str) {
        self.enable_category(Severity::Info, category);
    }

    pub fn disable_info_category(&self, category: &str) {
        self.disable_category(Severity::Info, category);
    }

    pub fn enable_warning_category(&self, category: &str) {
        self.enable_category(Severity::Warning, category);
    }

    pub fn disable_warning_category(&self, category: &str) {
        self.disable_category(Severity::Warning, category);
    }

    pub fn enable_error_category(&self, category: &str) {
        self.enable_category(Severity::Error, category);
    }

    pub fn disable_error_category(&self, category: &str) {
        self.disable_category(Severity::Error, category);
    }

    /// Enables every declared category of every severity
    pub fn enable_all(&self) {
        self.registry.lock().enable_all();
    }

    /// Disables every declared category of every severity. Categories declared later still start
    /// enabled.
    pub fn disable_all(&self) {
        self.registry.lock().disable_all();
    }

    /// Runs a closure with a snapshot of the registry. The closure may use this debugger.
    pub fn with_registry<R, F: FnOnce(&CategoryRegistry) -> R>(&self, func: F) -> R {
        let snapshot = self.registry.lock().clone();
        func(&snapshot)
    }

    /// Forgets every declared category and restores the default color.
    pub fn reset(&self) {
        self.registry.lock().reset();
        *self.default_color.write() = Color::default();
    }

    /// Logs a message if its category is enabled for the severity.
    ///
    /// A disabled category costs a single lookup: the message is not formatted and the sink is
    /// not called.
    pub fn log<M: Display + ?Sized>(
        &self,
        severity: Severity,
        message: &M,
        category: &str,
        decorations: &[Decoration],
    ) {
        if !self.is_enabled(severity, category) {
            return;
        }
        self.emit(severity, message, decorations);
    }

    /// Decorates a message and hands it to the severity's sink without consulting the registry.
    pub fn emit<M: Display + ?Sized>(
        &self,
        severity: Severity,
        message: &M,
        decorations: &[Decoration],
    ) {
        let rendered = apply_decorations(message.to_string(), decorations);
        let sink = self.sink(severity);
        sink.write(&rendered);
    }

    pub fn info<M: Display + ?Sized>(&self, message: &M, decorations: &[Decoration]) {
        self.log(Severity::Info, message, DEFAULT_CATEGORY, decorations);
    }

    pub fn info_in<M: Display + ?Sized>(
        &self,
        message: &M,
        category: &str,
        decorations: &[Decoration],
    ) {
        self.log(Severity::Info, message, category, decorations);
    }

    pub fn warning<M: Display + ?Sized>(&self, message: &M, decorations: &[Decoration]) {
        self.log(Severity::Warning, message, DEFAULT_CATEGORY, decorations);
    }

    pub fn warning_in<M: Display + ?Sized>(
        &self,
        message: &M,
        category: &str,
        decorations: &[Decoration],
    ) {
        self.log(Severity::Warning, message, category, decorations);
    }

    pub fn error<M: Display + ?Sized>(&self, message: &M, decorations: &[Decoration]) {
        self.log(Severity::Error, message, DEFAULT_CATEGORY, decorations);
    }

    pub fn error_in<M: Display + ?Sized>(
        &self,
        message: &M,
        category: &str,
        decorations: &[Decoration],
    ) {
        self.log(Severity::Error, message, category, decorations);
    }

    /// Gets the sink of a severity
    pub fn sink(&self, severity: Severity) -> Arc<dyn Sink> {
        self.sinks.read().get(severity).clone()
    }

    pub fn set_sink(&self, severity: Severity, sink: Arc<dyn Sink>) {
        self.sinks.write().set(severity, sink);
    }

    pub fn set_sinks(&self, sinks: Sinks) {
        *self.sinks.write() = sinks;
    }

    /// The default decoration color. It is never applied to messages automatically.
    pub fn default_color(&self) -> Color {
        *self.default_color.read()
    }

    pub fn set_default_color(&self, color: Color) {
        *self.default_color.write() = color;
    }

    /// Replaces the console, dropping any controller that was already resolved
    pub fn set_console(&self, console: Console) {
        *self.console.write() = Arc::new(console);
    }

    /// Clears the console of the host.
    ///
    /// # Error
    /// Errors if the host has no console that can be cleared.
    pub fn clear_console(&self) -> Result<(), ConsoleError> {
        let console = self.console.read().clone();
        console.clear()
    }
}
