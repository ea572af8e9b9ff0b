use std::collections::HashMap;

/// Original id -> reason, in order of first insertion.
///
/// Re-recording an id overwrites its reason but keeps its slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReasonRegistry {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ReasonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, original: &str, reason: String) {
        match self.index.get(original) {
            Some(&slot) => self.entries[slot].1 = reason,
            None => {
                self.index.insert(original.to_string(), self.entries.len());
                self.entries.push((original.to_string(), reason));
            }
        }
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.index
            .get(original)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    pub fn contains(&self, original: &str) -> bool {
        self.index.contains_key(original)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
