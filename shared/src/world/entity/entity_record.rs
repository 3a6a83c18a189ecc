use std::collections::HashMap;

use crate::{
    types::{ChunkId, Dimension, EntityId, OwnerId},
    world::entity::{chunk_list::ChunkList, visibility::Visibility},
};

/// Everything the world knows about one tracked entity.
pub struct EntityRecord<T> {
    id: EntityId,
    pub(crate) owner_id: Option<OwnerId>,
    pub(crate) dimension: Dimension,
    pub(crate) radius: i8,
    pub(crate) chunks: ChunkList,
    pub(crate) user_data: Option<T>,
    pub(crate) foreign: bool,
    pub(crate) visibility: Visibility,
    pub(crate) owner_visibility: HashMap<OwnerId, Visibility>,
}

impl<T> EntityRecord<T> {
    pub(crate) fn new(id: EntityId) -> Self {
        Self {
            id,
            owner_id: None,
            dimension: 0,
            radius: 0,
            chunks: ChunkList::new(),
            user_data: None,
            foreign: false,
            visibility: Visibility::Default,
            owner_visibility: HashMap::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// `None` for environment objects nobody owns.
    pub fn owner(&self) -> Option<OwnerId> {
        self.owner_id
    }

    pub fn is_owned_by(&self, owner_id: OwnerId) -> bool {
        self.owner_id == Some(owner_id)
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn radius(&self) -> i8 {
        self.radius
    }

    /// Observers contribute their chunks to their owner's interest set.
    pub fn is_observer(&self) -> bool {
        self.radius != 0
    }

    pub fn chunk(&self) -> Option<ChunkId> {
        self.chunks.first()
    }

    pub fn chunks(&self) -> &ChunkList {
        &self.chunks
    }

    pub fn user_data(&self) -> Option<&T> {
        self.user_data.as_ref()
    }

    pub fn user_data_mut(&mut self) -> Option<&mut T> {
        self.user_data.as_mut()
    }

    /// Replaces the attached value, returning the previous one.
    pub fn set_user_data(&mut self, user_data: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.user_data, user_data)
    }

    /// True when the entity was created by reading a remote section.
    pub fn is_foreign(&self) -> bool {
        self.foreign
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn owner_visibility(&self, owner_id: OwnerId) -> Visibility {
        self.owner_visibility
            .get(&owner_id)
            .copied()
            .unwrap_or_default()
    }

    /// The override in effect when `owner_id` asks about this entity.
    pub fn visibility_for(&self, owner_id: OwnerId) -> Visibility {
        Visibility::resolve(self.owner_visibility(owner_id), self.visibility)
    }

    pub(crate) fn set_owner_visibility(&mut self, owner_id: OwnerId, visibility: Visibility) {
        if visibility == Visibility::Default {
            self.owner_visibility.remove(&owner_id);
        } else {
            self.owner_visibility.insert(owner_id, visibility);
        }
    }
}
