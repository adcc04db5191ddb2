//! Insertion-ordered name sets used by the parser.
//!
//! Membership goes through an `FxHashSet`; a parallel vector remembers the
//! order of first insertion so that end-of-program checks report the same
//! name on every run.

use rustc_hash::FxHashSet;

#[derive(Debug, Default, Clone)]
pub struct NameSet {
    order: Vec<String>,
    members: FxHashSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the name was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.members.contains(name) {
            return false;
        }
        self.members.insert(name.to_string());
        self.order.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Names in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
