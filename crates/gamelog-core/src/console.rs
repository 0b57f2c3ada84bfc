//! Console control clears the output of the hosting console.
//!
//! The controller of a host is resolved lazily. A [`Console`] resolves its controller the first
//! time it is cleared and keeps it for every later call.

use crate::error::ConsoleError;
use atty::Stream;
use once_cell::sync::OnceCell;
use std::fmt::{Debug, Formatter};
use std::io::{stdout, Write};

/// Something that can clear the console of a host.
pub trait ConsoleController: Send + Sync {
    /// Clears all output of the console
    fn clear(&self) -> Result<(), ConsoleError>;
}

type Resolver = Box<dyn Fn() -> Result<Box<dyn ConsoleController>, ConsoleError> + Send + Sync>;

/// Resolves and caches a [`ConsoleController`].
pub struct Console {
    resolver: Resolver,
    controller: OnceCell<Box<dyn ConsoleController>>,
}

impl Console {
    /// Creates a console that resolves its controller with `resolver` on first use.
    ///
    /// A failed resolution is reported to the caller and attempted again on the next clear.
    pub fn new<F>(resolver: F) -> Self
    where
        F: Fn() -> Result<Box<dyn ConsoleController>, ConsoleError> + Send + Sync + 'static,
    {
        Self {
            resolver: Box::new(resolver),
            controller: OnceCell::new(),
        }
    }

    /// A console with an already resolved controller
    pub fn with_controller<C: ConsoleController + 'static>(controller: C) -> Self {
        let console = Self::new(|| Err(ConsoleError::unavailable("controller already resolved")));
        let _ = console.controller.set(Box::new(controller));
        console
    }

    /// A console that can never be cleared
    pub fn unavailable(reason: impl AsRef<str>) -> Self {
        let reason = reason.as_ref().to_string();
        Self::new(move || Err(ConsoleError::unavailable(&reason)))
    }

    /// The terminal attached to stdout
    pub fn terminal() -> Self {
        Self::new(|| TerminalConsole::resolve().map(|c| Box::new(c) as Box<dyn ConsoleController>))
    }

    /// Whether the controller has been resolved yet
    pub fn is_resolved(&self) -> bool {
        self.controller.get().is_some()
    }

    /// Clears the console, resolving the controller first if needed.
    pub fn clear(&self) -> Result<(), ConsoleError> {
        let controller = self.controller.get_or_try_init(|| {
            log::debug!("resolving console controller");
            (self.resolver)()
        })?;
        controller.clear()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::terminal()
    }
}

impl Debug for Console {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// Clears an interactive terminal with ANSI escape sequences.
#[derive(Debug)]
pub struct TerminalConsole {
    _private: (),
}

impl TerminalConsole {
    const CLEAR_SEQUENCE: &'static [u8] = b"\x1b[2J\x1b[3J\x1b[H";

    /// Resolves the terminal, failing if stdout is not attached to one.
    pub fn resolve() -> Result<Self, ConsoleError> {
        if atty::is(Stream::Stdout) {
            Ok(Self { _private: () })
        } else {
            Err(ConsoleError::unavailable("stdout is not an interactive terminal"))
        }
    }
}

impl ConsoleController for TerminalConsole {
    fn clear(&self) -> Result<(), ConsoleError> {
        let mut out = stdout().lock();
        out.write_all(Self::CLEAR_SEQUENCE)?;
        out.flush()?;
        Ok(())
    }
}
