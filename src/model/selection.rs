use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Select-all never picks more than this many rows, whatever the page size.
/// It bounds the payload of whatever bulk action follows.
pub const SELECT_ALL_LIMIT: usize = 50;

/// Selected contact IDs, kept in the order they were selected
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    ids: IndexSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(|s| s.as_str())
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    pub(crate) fn insert(&mut self, id: String) -> bool {
        self.ids.insert(id)
    }

    /// Remove an ID, keeping the order of the rest
    pub(crate) fn remove(&mut self, id: &str) -> bool {
        self.ids.shift_remove(id)
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.ids.retain(|id| keep(id.as_str()));
    }
}

impl FromIterator<String> for SelectionState {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        SelectionState {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_selection_order_and_dedups() {
        let sel: SelectionState = ["b", "a", "b"].into_iter().map(String::from).collect();
        assert_eq!(sel.ids(), vec!["b", "a"]);
    }

    #[test]
    fn remove_preserves_order_of_remaining() {
        let mut sel: SelectionState = ["a", "b", "c"].into_iter().map(String::from).collect();
        assert!(sel.remove("b"));
        assert!(!sel.remove("b"));
        assert_eq!(sel.ids(), vec!["a", "c"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let sel: SelectionState = ["x", "y"].into_iter().map(String::from).collect();
        assert_eq!(serde_json::to_string(&sel).unwrap(), r#"["x","y"]"#);
    }
}
