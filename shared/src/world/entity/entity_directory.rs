use std::collections::HashMap;

use crate::{
    grid::grid_config::GridConfig,
    types::EntityId,
    world::entity::entity_record::EntityRecord,
};

/// Identity-keyed table of tracked entities.
///
/// Records live in a dense vector in insertion order; removing one moves the
/// last record into the freed slot. Every scan in the world walks this
/// storage order, which is what keeps query results and section contents
/// deterministic between calls.
pub struct EntityDirectory<T> {
    records: Vec<EntityRecord<T>>,
    index: HashMap<EntityId, usize>,
}

impl<T> EntityDirectory<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn contains(&self, entity_id: &EntityId) -> bool {
        self.index.contains_key(entity_id)
    }

    /// Returns false, changing nothing, if the id is already tracked.
    pub fn insert(&mut self, entity_id: EntityId) -> bool {
        if self.index.contains_key(&entity_id) {
            return false;
        }
        self.index.insert(entity_id, self.records.len());
        self.records.push(EntityRecord::new(entity_id));
        true
    }

    pub fn remove(&mut self, entity_id: &EntityId) -> Option<EntityRecord<T>> {
        let slot = self.index.remove(entity_id)?;
        let record = self.records.swap_remove(slot);
        if let Some(moved) = self.records.get(slot) {
            self.index.insert(moved.id(), slot);
        }
        Some(record)
    }

    pub fn get(&self, entity_id: &EntityId) -> Option<&EntityRecord<T>> {
        let slot = self.index.get(entity_id)?;
        self.records.get(*slot)
    }

    pub fn get_mut(&mut self, entity_id: &EntityId) -> Option<&mut EntityRecord<T>> {
        let slot = self.index.get(entity_id)?;
        self.records.get_mut(*slot)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntityRecord<T>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }

    /// Re-applies the chunk list invariant after the grid shape changed.
    pub fn revalidate_chunks(&mut self, grid: &GridConfig) {
        for record in self.records.iter_mut() {
            record.chunks.retain_valid_prefix(grid);
        }
    }
}

impl<T> Default for EntityDirectory<T> {
    fn default() -> Self {
        Self::new()
    }
}
