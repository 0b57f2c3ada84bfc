//! The core of gamelog.
//!
//! Messages are routed through three independent severity channels (info, warning and error).
//! Every channel keeps its own table of categories, and a category that has never been seen
//! before starts out enabled. Messages that pass the gate are decorated with inline markup
//! (`<color=#RRGGBB>`, `<b>`, `<i>`) and handed to the [`Sink`](sink::Sink) of their severity.
//!
//! Most hosts want the process-wide facade from the `gamelog` crate. This crate exposes the
//! pieces so a host can own its own [`Debugger`].

#[macro_use]
extern crate serde;

pub mod color;
pub mod console;
pub mod debugger;
pub mod decoration;
pub mod error;
pub mod markup;
pub mod registry;
pub mod settings;
pub mod severity;
pub mod sink;

pub use color::Color;
pub use console::{Console, ConsoleController};
pub use debugger::{Debugger, DEFAULT_CATEGORY};
pub use decoration::{apply_decorations, bold, color, italic, Decoration};
pub use error::{ConsoleError, ParseColorError, SettingsError};
pub use settings::DebuggerSettings;
pub use severity::Severity;
pub use sink::{Sink, Sinks};
