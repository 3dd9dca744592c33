//! Filter registry backing the chip screen.
//!
//! A registry is a fixed, ordered list of named toggles. Items are created
//! once, all switched off, and the only mutation afterwards is flipping an
//! item's `enabled` flag. Display order is insertion order.

use dioxus::logger::tracing::debug;

const FRUIT_NAMES: [&str; 15] = [
    "Apple",
    "Bananas",
    "Cherries",
    "Damson",
    "Elderberry",
    "Finger",
    "Grapefruit",
    "Honeydew",
    "Indonesian",
    "Jack",
    "Kaffir",
    "Longan",
    "Mandarin",
    "Navel",
    "Oval",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterItem {
    name: String,
    pub enabled: bool,
}

impl FilterItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRegistry {
    items: Vec<FilterItem>,
}

impl FilterRegistry {
    /// Builds a registry with every item switched off.
    ///
    /// Repeated names are dropped so that each name owns exactly one toggle.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<FilterItem> = Vec::new();
        for name in names {
            let name = name.into();
            if items.iter().any(|i| i.name == name) {
                debug!("skipping duplicate filter {name}");
                continue;
            }
            items.push(FilterItem::new(name));
        }
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FilterItem> {
        self.items.get(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterItem> {
        self.items.iter()
    }

    /// Flips the item at `index` and returns its new state.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        item.enabled = !item.enabled;
        debug!("filter {} -> {}", item.name, item.enabled);
        Some(item.enabled)
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        item.enabled = enabled;
        debug!("filter {} -> {}", item.name, item.enabled);
        Some(item.enabled)
    }

    /// Names of the enabled items, in registry order.
    pub fn collect_selected(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|i| i.enabled)
            .map(|i| i.name.clone())
            .collect()
    }
}

impl<'a> IntoIterator for &'a FilterRegistry {
    type Item = &'a FilterItem;
    type IntoIter = std::slice::Iter<'a, FilterItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Fresh registry of the fruit filters shown on the home screen.
pub fn fruit_filters() -> FilterRegistry {
    FilterRegistry::new(FRUIT_NAMES)
}
