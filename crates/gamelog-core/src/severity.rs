//! The severity channels a message can be logged on

use log::Level;
use strum_macros::{Display, EnumIter, EnumString};

/// One of the three independent severity channels.
///
/// Severities are not ordered. Every severity keeps its own category table, so disabling a
/// category for errors has no effect on its info or warning messages.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    #[strum(to_string = "warning", serialize = "warn")]
    Warning,
    Error,
}

impl Severity {
    /// All severities
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warning, Severity::Error];
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Level::Info,
            Severity::Warning => Level::Warn,
            Severity::Error => Level::Error,
        }
    }
}
