//! Mapping between caller-supplied state names and dense ids.

use crate::automaton::state::StateId;
use indexmap::IndexMap;

/// Assigns dense [`StateId`]s to string state names and resolves them back.
///
/// Interning a name only reserves an id for it; whether the state has been
/// declared is tracked separately by the engine. This is what lets a
/// transition carry a destination that was never declared.
#[derive(Clone, Debug, Default)]
pub(crate) struct NameTable {
    ids: IndexMap<String, StateId>,
}

impl NameTable {
    pub(crate) fn new() -> Self {
        Self {
            ids: IndexMap::new(),
        }
    }

    /// Return the id for `name`, assigning the next free id on first use.
    pub(crate) fn intern(&mut self, name: &str) -> StateId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.ids.len() as StateId;
        self.ids.insert(name.to_owned(), id);
        id
    }

    /// Look up a name without interning it.
    pub(crate) fn get(&self, name: &str) -> Option<StateId> {
        self.ids.get(name).copied()
    }

    /// The name interned for `id`. Ids are assigned densely in insertion
    /// order, so an id doubles as its map index.
    pub(crate) fn name(&self, id: StateId) -> &str {
        self.ids
            .get_index(id as usize)
            .map(|(name, _)| name.as_str())
            .unwrap_or("<unknown>")
    }
}
