//! The logging macros.
//!
//! Every macro accepts a message, an optional category and an optional list of decorations:
//!
//! ```
//! use gamelog::{log_info, log_warning, Decoration};
//!
//! log_info!("loaded level");
//! log_info!("loaded level", [Decoration::BOLD]);
//! log_warning!("frame took too long", "Render");
//! log_warning!("frame took too long", "Render", [Decoration::color(1.0, 0.5, 0.0)]);
//! ```
//!
//! The messages and decorations are only evaluated when the category is enabled. When the
//! `enabled` feature is off the macros expand to `()` and their arguments are never evaluated.

#[cfg(feature = "enabled")]
#[doc(hidden)]
#[macro_export]
macro_rules! __gamelog_log {
    ($severity:expr, $message:expr $(,)?) => {
        $crate::__gamelog_log!($severity, $message, $crate::DEFAULT_CATEGORY, [])
    };
    ($severity:expr, $message:expr, [$($decoration:expr),* $(,)?] $(,)?) => {
        $crate::__gamelog_log!($severity, $message, $crate::DEFAULT_CATEGORY, [$($decoration),*])
    };
    ($severity:expr, $message:expr, $category:expr, [$($decoration:expr),* $(,)?] $(,)?) => {{
        let debugger = $crate::debugger();
        if debugger.is_enabled($severity, $category) {
            debugger.emit($severity, &$message, &[$($decoration),*]);
        }
    }};
    ($severity:expr, $message:expr, $category:expr $(,)?) => {
        $crate::__gamelog_log!($severity, $message, $category, [])
    };
}

/// Logs an info message.
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! log_info {
    ($($args:tt)+) => {
        $crate::__gamelog_log!($crate::Severity::Info, $($args)+)
    };
}

/// Logs a warning message.
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! log_warning {
    ($($args:tt)+) => {
        $crate::__gamelog_log!($crate::Severity::Warning, $($args)+)
    };
}

/// Logs an error message.
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! log_error {
    ($($args:tt)+) => {
        $crate::__gamelog_log!($crate::Severity::Error, $($args)+)
    };
}

/// Logs an info message. Compiled out.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! log_info {
    ($($args:tt)*) => {
        ()
    };
}

/// Logs a warning message. Compiled out.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! log_warning {
    ($($args:tt)*) => {
        ()
    };
}

/// Logs an error message. Compiled out.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! log_error {
    ($($args:tt)*) => {
        ()
    };
}
