//! Open/closed state of a form's collapsible sections.
//!
//! The state is a value: every transition takes the map and returns the next one.

use std::collections::BTreeMap;
use std::fmt::Debug;
use strum::IntoEnumIterator;

/// A collapsible section of one settings form.
pub trait Section: Copy + Ord + Debug + IntoEnumIterator {
    /// Whether the section starts expanded.
    fn default_open(self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections<S: Section> {
    open: BTreeMap<S, bool>,
}

impl<S: Section> Sections<S> {
    pub fn new() -> Self {
        Self { open: S::iter().map(|s| (s, s.default_open())).collect() }
    }

    pub fn is_open(&self, section: S) -> bool {
        self.open.get(&section).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn toggle(mut self, section: S) -> Self {
        let open = self.open.entry(section).or_insert(false);
        *open = !*open;
        self
    }

    /// Opens or collapses every section at once.
    #[must_use]
    pub fn expand_all(mut self, open: bool) -> Self {
        self.open.values_mut().for_each(|v| *v = open);
        self
    }

    pub fn all_open(&self) -> bool {
        self.open.values().all(|open| *open)
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, bool)> + '_ {
        self.open.iter().map(|(s, open)| (*s, *open))
    }
}

impl<S: Section> Default for Sections<S> {
    fn default() -> Self {
        Self::new()
    }
}
