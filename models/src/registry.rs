use std::collections::BTreeMap;

use shared_constants::ICON_SUGGESTION_THRESHOLD;
use strsim::jaro_winkler;

/// Name to component table owned by the application.
#[derive(Debug, Clone)]
pub struct ComponentRegistry<C> {
    entries: BTreeMap<String, C>,
}

impl<C> Default for ComponentRegistry<C> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<C> ComponentRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `component` under `name`, returning whatever was registered there before.
    pub fn register(&mut self, name: impl Into<String>, component: C) -> Option<C> {
        self.entries.insert(name.into(), component)
    }

    /// Registers every entry, later duplicates overwriting earlier ones.
    /// Returns the names that were overwritten.
    pub fn register_all<N, I>(&mut self, components: I) -> Vec<String>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, C)>,
    {
        components
            .into_iter()
            .filter_map(|(name, component)| {
                let name = name.into();
                self.register(name.clone(), component).map(|_| name)
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&C> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Closest registered name to `name`, if any is similar enough.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let lookup = name.to_lowercase();
        self.names()
            .map(|candidate| (candidate, jaro_winkler(&lookup, &candidate.to_lowercase())))
            .filter(|(_, score)| *score >= ICON_SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, _)| candidate)
    }
}
