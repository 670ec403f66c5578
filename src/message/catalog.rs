//! Display labels for coded form values.

use serde::Serialize;

/// An immutable code → label table.
///
/// Lookups fall back to the raw code when it is not in the table.
#[derive(Debug, Clone, Copy)]
pub struct LabelCatalog {
    entries: &'static [(&'static str, &'static str)],
}

/// One catalog row, as exposed to pick lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelEntry {
    pub code: &'static str,
    pub label: &'static str,
}

impl LabelCatalog {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Label for `code`, or `code` itself if unknown.
    pub fn label<'a>(&self, code: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
            .unwrap_or(code)
    }

    /// Whether `code` has a label.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|(c, _)| *c == code)
    }

    /// All rows, in display order.
    pub fn entries(&self) -> impl Iterator<Item = LabelEntry> {
        let entries = self.entries;
        entries
            .iter()
            .map(|&(code, label)| LabelEntry { code, label })
    }
}

/// Services offered on the booking form.
pub static SERVICES: LabelCatalog = LabelCatalog::new(&[
    ("aerial-photography", "Aerial Photography"),
    ("surveying", "Land Surveying"),
    ("inspections", "Inspections"),
    ("delivery", "Delivery Services"),
]);

/// Budget ranges offered on the booking form.
pub static BUDGET_RANGES: LabelCatalog = LabelCatalog::new(&[
    ("under-500", "Under $500"),
    ("500-1000", "$500 - $1,000"),
    ("1000-2500", "$1,000 - $2,500"),
    ("2500-5000", "$2,500 - $5,000"),
    ("over-5000", "Over $5,000"),
]);
