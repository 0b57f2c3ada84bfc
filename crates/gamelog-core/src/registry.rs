//! The category registry gates messages per severity and per category.
//!
//! Categories never need to be registered up front. Querying a category that has not been seen
//! before declares it, and new categories always start enabled. Entries are never removed; the
//! bulk operations only flip entries that already exist.

use crate::severity::Severity;
use std::collections::HashMap;

/// The enabled flags of every category declared for a single severity.
#[derive(Debug, Default, Clone)]
pub struct CategoryTable {
    entries: HashMap<String, bool>,
}

impl CategoryTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self, category: &str) {
        self.set(category, true);
    }

    pub fn disable(&mut self, category: &str) {
        self.set(category, false);
    }

    fn set(&mut self, category: &str, enabled: bool) {
        match self.entries.get_mut(category) {
            Some(flag) => *flag = enabled,
            None => {
                self.entries.insert(category.to_string(), enabled);
            }
        }
    }

    /// Checks whether a category is enabled, declaring it as enabled if it was never seen.
    pub fn is_enabled(&mut self, category: &str) -> bool {
        if let Some(&enabled) = self.entries.get(category) {
            return enabled;
        }
        log::trace!("declaring category {:?}", category);
        self.entries.insert(category.to_string(), true);
        true
    }

    /// Gets the stored flag of a category without declaring it.
    pub fn get(&self, category: &str) -> Option<bool> {
        self.entries.get(category).copied()
    }

    /// Sets every existing entry to `enabled`
    pub fn set_all(&mut self, enabled: bool) {
        self.entries.values_mut().for_each(|flag| *flag = enabled);
    }

    /// The declared categories, sorted by name
    pub fn categories(&self) -> Vec<(&str, bool)> {
        let mut categories = self
            .entries
            .iter()
            .map(|(name, &enabled)| (name.as_str(), enabled))
            .collect::<Vec<_>>();
        categories.sort_unstable_by(|left, right| left.0.cmp(right.0));
        categories
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// One [`CategoryTable`] per severity.
#[derive(Debug, Default, Clone)]
pub struct CategoryRegistry {
    info: CategoryTable,
    warning: CategoryTable,
    error: CategoryTable,
}

impl CategoryRegistry {
    /// Creates a registry with no declared categories
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the table of a severity
    pub fn table(&self, severity: Severity) -> &CategoryTable {
        match severity {
            Severity::Info => &self.info,
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
        }
    }

    /// Gets the table of a severity mutably
    pub fn table_mut(&mut self, severity: Severity) -> &mut CategoryTable {
        match severity {
            Severity::Info => &mut self.info,
            Severity::Warning => &mut self.warning,
            Severity::Error => &mut self.error,
        }
    }

    pub fn enable(&mut self, severity: Severity, category: &str) {
        self.table_mut(severity).enable(category);
    }

    pub fn disable(&mut self, severity: Severity, category: &str) {
        self.table_mut(severity).disable(category);
    }

    /// Checks whether a category is enabled for a severity. Unknown categories are declared and
    /// enabled.
    pub fn is_enabled(&mut self, severity: Severity, category: &str) -> bool {
        self.table_mut(severity).is_enabled(category)
    }

    /// Enables every declared category of every severity.
    ///
    /// Categories that are declared afterwards are unaffected and start enabled as usual.
    pub fn enable_all(&mut self) {
        self.set_all(true);
    }

    /// Disables every declared category of every severity.
    ///
    /// This does not stop a category that is declared afterwards from starting enabled.
    pub fn disable_all(&mut self) {
        self.set_all(false);
    }

    fn set_all(&mut self, enabled: bool) {
        for severity in Severity::ALL {
            self.table_mut(severity).set_all(enabled);
        }
    }

    /// Forgets every declared category
    pub fn reset(&mut self) {
        for severity in Severity::ALL {
            self.table_mut(severity).clear();
        }
    }
}
