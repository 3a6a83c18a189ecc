use std::collections::{HashMap, HashSet};

use crate::types::EntityId;

/// Remembers, for one owner, which entities have had a create entry
/// committed and not yet been removed.
///
/// An untracked entity is retired: it still owes the owner a remove, but no
/// longer counts as sent, so an entity tracked again under the same id gets
/// a fresh create once that remove went out.
pub struct SentTracker {
    // entity -> order in which its create was committed
    sent: HashMap<EntityId, u64>,
    retired: HashMap<EntityId, u64>,
    next_order: u64,
}

impl SentTracker {
    pub fn new() -> Self {
        Self {
            sent: HashMap::new(),
            retired: HashMap::new(),
            next_order: 0,
        }
    }

    /// Whether the live entity with this id has been created on the owner.
    pub fn contains(&self, entity_id: &EntityId) -> bool {
        self.sent.contains_key(entity_id)
    }

    pub fn is_retired(&self, entity_id: &EntityId) -> bool {
        self.retired.contains_key(entity_id)
    }

    /// Moves a sent entity to the retired set. Returns false if it was not
    /// sent.
    pub fn retire(&mut self, entity_id: EntityId) -> bool {
        match self.sent.remove(&entity_id) {
            Some(order) => {
                self.retired.insert(entity_id, order);
                true
            }
            None => false,
        }
    }

    /// Returns false if the entity was already marked.
    pub fn insert(&mut self, entity_id: EntityId) -> bool {
        if self.sent.contains_key(&entity_id) {
            return false;
        }
        self.sent.insert(entity_id, self.next_order);
        self.next_order += 1;
        true
    }

    /// Forgets the entity once its remove was committed, retired entries
    /// first.
    pub fn remove(&mut self, entity_id: &EntityId) -> bool {
        self.retired.remove(entity_id).is_some() || self.sent.remove(entity_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sent.len() + self.retired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.is_empty() && self.retired.is_empty()
    }

    /// Entities owed a remove: every retired one, and every sent one missing
    /// from `interest`. Oldest mark first.
    pub fn stale(&self, interest: &HashSet<EntityId>) -> Vec<EntityId> {
        let mut stale: Vec<(u64, EntityId)> = self
            .sent
            .iter()
            .filter(|(entity_id, _)| !interest.contains(entity_id))
            .chain(self.retired.iter())
            .map(|(entity_id, order)| (*order, *entity_id))
            .collect();
        stale.sort_unstable();
        stale.into_iter().map(|(_, entity_id)| entity_id).collect()
    }
}

impl Default for SentTracker {
    fn default() -> Self {
        Self::new()
    }
}
