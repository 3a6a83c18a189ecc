use thiserror::Error;

use crate::types::EntityId;

/// Errors returned by world and entity operations
///
/// A failed call never changes the entity directory or any owner's sent
/// records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// The world was destroyed; nothing can be done with it anymore
    #[error("World has been destroyed")]
    WorldInvalid,

    // Entity Errors

    /// Operated on an id that is not currently tracked
    #[error("Entity {entity_id} is not tracked")]
    EntityNotTracked { entity_id: EntityId },

    /// Tried to track an id that is already tracked
    #[error("Entity {entity_id} is already tracked")]
    EntityAlreadyTracked { entity_id: EntityId },

    /// Tried to untrack an entity that was created by reading a remote section
    #[error("Entity {entity_id} is foreign and can only be removed by a remote section")]
    EntityForeign { entity_id: EntityId },

    /// Chunk array longer than an entity can hold
    #[error("Entity {entity_id} can occupy at most {max} chunks, {given} given")]
    TooManyChunks {
        entity_id: EntityId,
        given: usize,
        max: usize,
    },
}
