use std::collections::HashMap;

use log::debug;

use crate::{
    grid::{chunk_offset::ChunkOffset, grid_config::GridConfig},
    types::{Axes, ChunkId, Dimension, EntityId, OwnerId, MAX_ENTITY_CHUNKS},
    world::{
        entity::{
            chunk_list::ChunkList, entity_directory::EntityDirectory, entity_record::EntityRecord,
            visibility::Visibility,
        },
        error::WorldError,
        event::{
            handler_table::HandlerTable,
            read_event::{ReadEventKind, ReadHandler},
            write_event::WriteHandler,
        },
        host::sent_tracker::SentTracker,
        query::fetch::Fetch,
        segment::SectionKind,
        world_config::WorldConfig,
    },
};

/// A replicated world: the chunk grid, every tracked entity, the registered
/// event handlers and what has been sent to each owner so far.
///
/// `T` is the value callers may attach to each entity.
pub struct World<T = ()> {
    pub(crate) config: WorldConfig,
    pub(crate) directory: EntityDirectory<T>,
    pub(crate) handlers: HandlerTable<T>,
    pub(crate) sent: HashMap<OwnerId, SentTracker>,
    valid: bool,
}

impl<T> World<T> {
    pub fn new(config: WorldConfig) -> Self {
        Self {
            config,
            directory: EntityDirectory::new(),
            handlers: HandlerTable::new(),
            sent: HashMap::new(),
            valid: true,
        }
    }

    // Lifecycle

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Drops every entity, handler and sent record. Any later call fails
    /// with [`WorldError::WorldInvalid`].
    pub fn destroy(&mut self) -> Result<(), WorldError> {
        self.check_valid()?;

        debug!(
            "destroying world with {} tracked entities",
            self.directory.len()
        );
        self.directory.clear();
        self.handlers.clear();
        self.sent.clear();
        self.valid = false;

        Ok(())
    }

    pub(crate) fn check_valid(&self) -> Result<(), WorldError> {
        if self.valid {
            Ok(())
        } else {
            Err(WorldError::WorldInvalid)
        }
    }

    // Configuration

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn grid(&self) -> &GridConfig {
        &self.config.grid
    }

    /// Zero on any axis is stored as 1.
    pub fn set_chunk_size(&mut self, chunk_size: Axes<u16>) -> Result<(), WorldError> {
        self.check_valid()?;
        self.config.grid.set_chunk_size(chunk_size);
        Ok(())
    }

    /// Zero on any axis is stored as 1. Entity chunk lists are cut at the
    /// first chunk the resized grid no longer holds.
    pub fn set_chunk_count(&mut self, chunk_count: Axes<u16>) -> Result<(), WorldError> {
        self.check_valid()?;
        self.config.grid.set_chunk_count(chunk_count);
        self.directory.revalidate_chunks(&self.config.grid);
        Ok(())
    }

    pub fn set_chunk_offset(&mut self, chunk_offset: Axes<ChunkOffset>) -> Result<(), WorldError> {
        self.check_valid()?;
        self.config.grid.set_chunk_offset(chunk_offset);
        Ok(())
    }

    pub fn set_interest_radius(&mut self, radius: Option<u8>) -> Result<(), WorldError> {
        self.check_valid()?;
        self.config.interest_radius = radius;
        Ok(())
    }

    // Handlers

    /// Registers the handler called for each candidate entry of a `kind`
    /// section, returning the one it replaces.
    pub fn set_write_handler<H: WriteHandler<T> + 'static>(
        &mut self,
        kind: SectionKind,
        handler: H,
    ) -> Result<Option<Box<dyn WriteHandler<T>>>, WorldError> {
        self.check_valid()?;
        Ok(self.handlers.set_write(kind, Box::new(handler)))
    }

    pub fn remove_write_handler(
        &mut self,
        kind: SectionKind,
    ) -> Result<Option<Box<dyn WriteHandler<T>>>, WorldError> {
        self.check_valid()?;
        Ok(self.handlers.remove_write(kind))
    }

    /// Registers the handler called for each `kind` read event, returning
    /// the one it replaces.
    pub fn set_read_handler<H: ReadHandler<T> + 'static>(
        &mut self,
        kind: ReadEventKind,
        handler: H,
    ) -> Result<Option<Box<dyn ReadHandler<T>>>, WorldError> {
        self.check_valid()?;
        Ok(self.handlers.set_read(kind, Box::new(handler)))
    }

    pub fn remove_read_handler(
        &mut self,
        kind: ReadEventKind,
    ) -> Result<Option<Box<dyn ReadHandler<T>>>, WorldError> {
        self.check_valid()?;
        Ok(self.handlers.remove_read(kind))
    }

    // Entities

    pub fn track_entity(&mut self, entity_id: EntityId) -> Result<(), WorldError> {
        self.check_valid()?;
        if !self.directory.insert(entity_id) {
            return Err(WorldError::EntityAlreadyTracked { entity_id });
        }
        Ok(())
    }

    /// Stops tracking a local entity and hands back its attached value.
    ///
    /// Owners that were sent a create for it are owed a remove, which their
    /// next section carries even if the id is tracked again in between.
    /// Foreign entities can only be removed by reading a remove section.
    pub fn untrack_entity(&mut self, entity_id: EntityId) -> Result<Option<T>, WorldError> {
        let record = self.record(entity_id)?;
        if record.is_foreign() {
            return Err(WorldError::EntityForeign { entity_id });
        }
        for tracker in self.sent.values_mut() {
            tracker.retire(entity_id);
        }
        Ok(self
            .directory
            .remove(&entity_id)
            .and_then(|mut record| record.user_data.take()))
    }

    pub fn is_tracked(&self, entity_id: EntityId) -> Result<bool, WorldError> {
        self.check_valid()?;
        Ok(self.directory.contains(&entity_id))
    }

    pub fn entity_count(&self) -> Result<usize, WorldError> {
        self.check_valid()?;
        Ok(self.directory.len())
    }

    /// Read access to everything known about a tracked entity.
    pub fn entity(&self, entity_id: EntityId) -> Result<&EntityRecord<T>, WorldError> {
        self.record(entity_id)
    }

    pub fn is_foreign(&self, entity_id: EntityId) -> Result<bool, WorldError> {
        Ok(self.record(entity_id)?.is_foreign())
    }

    pub fn set_entity_owner(
        &mut self,
        entity_id: EntityId,
        owner_id: Option<OwnerId>,
    ) -> Result<(), WorldError> {
        self.record_mut(entity_id)?.owner_id = owner_id;
        Ok(())
    }

    pub fn set_entity_dimension(
        &mut self,
        entity_id: EntityId,
        dimension: Dimension,
    ) -> Result<(), WorldError> {
        self.record_mut(entity_id)?.dimension = dimension;
        Ok(())
    }

    /// Any non-zero radius makes the entity an observer.
    pub fn set_entity_radius(&mut self, entity_id: EntityId, radius: i8) -> Result<(), WorldError> {
        self.record_mut(entity_id)?.radius = radius;
        Ok(())
    }

    /// Places the entity in a single chunk. An invalid chunk leaves it in
    /// none.
    pub fn set_entity_chunk(&mut self, entity_id: EntityId, chunk: ChunkId) -> Result<(), WorldError> {
        self.set_entity_chunks(entity_id, &[chunk])
    }

    /// Replaces every chunk the entity occupies. The list is kept up to the
    /// first invalid chunk.
    pub fn set_entity_chunks(
        &mut self,
        entity_id: EntityId,
        chunks: &[ChunkId],
    ) -> Result<(), WorldError> {
        self.check_valid()?;
        if chunks.len() > MAX_ENTITY_CHUNKS {
            return Err(WorldError::TooManyChunks {
                entity_id,
                given: chunks.len(),
                max: MAX_ENTITY_CHUNKS,
            });
        }
        let list = ChunkList::from_prefix(&self.config.grid, chunks);
        self.record_mut(entity_id)?.chunks = list;
        Ok(())
    }

    pub fn entity_chunk(&self, entity_id: EntityId) -> Result<Option<ChunkId>, WorldError> {
        Ok(self.record(entity_id)?.chunk())
    }

    /// Copies the entity's chunks into `out`, reporting truncation when it
    /// holds more than fit.
    pub fn entity_chunks(&self, entity_id: EntityId, out: &mut [ChunkId]) -> Result<Fetch, WorldError> {
        let record = self.record(entity_id)?;
        Ok(Fetch::copy_into(record.chunks().as_slice(), out))
    }

    /// Attaches a value to the entity, returning the one it replaces.
    pub fn set_entity_user_data(
        &mut self,
        entity_id: EntityId,
        user_data: Option<T>,
    ) -> Result<Option<T>, WorldError> {
        Ok(self.record_mut(entity_id)?.set_user_data(user_data))
    }

    pub fn entity_user_data(&self, entity_id: EntityId) -> Result<Option<&T>, WorldError> {
        Ok(self.record(entity_id)?.user_data())
    }

    pub fn entity_user_data_mut(&mut self, entity_id: EntityId) -> Result<Option<&mut T>, WorldError> {
        Ok(self.record_mut(entity_id)?.user_data_mut())
    }

    /// Overrides chunk matching for every owner that has no override of
    /// its own.
    pub fn set_entity_visibility(
        &mut self,
        entity_id: EntityId,
        visibility: Visibility,
    ) -> Result<(), WorldError> {
        self.record_mut(entity_id)?.visibility = visibility;
        Ok(())
    }

    /// Overrides chunk matching for a single owner. Setting
    /// [`Visibility::Default`] clears the override.
    pub fn set_entity_owner_visibility(
        &mut self,
        entity_id: EntityId,
        owner_id: OwnerId,
        visibility: Visibility,
    ) -> Result<(), WorldError> {
        self.record_mut(entity_id)?
            .set_owner_visibility(owner_id, visibility);
        Ok(())
    }

    // Sent records

    /// Whether a create for `entity_id` has been committed to `owner_id`
    /// and not yet followed by a remove.
    pub fn is_sent(&self, owner_id: OwnerId, entity_id: EntityId) -> Result<bool, WorldError> {
        self.check_valid()?;
        Ok(self
            .sent
            .get(&owner_id)
            .is_some_and(|tracker| {
                tracker.contains(&entity_id) || tracker.is_retired(&entity_id)
            }))
    }

    /// Forgets everything sent to `owner_id`, e.g. once it disconnected.
    /// Its next section starts over with creates.
    pub fn reset_owner(&mut self, owner_id: OwnerId) -> Result<(), WorldError> {
        self.check_valid()?;
        if self.sent.remove(&owner_id).is_some() {
            debug!("reset sent records of owner {owner_id}");
        }
        Ok(())
    }

    fn record(&self, entity_id: EntityId) -> Result<&EntityRecord<T>, WorldError> {
        self.check_valid()?;
        self.directory
            .get(&entity_id)
            .ok_or(WorldError::EntityNotTracked { entity_id })
    }

    fn record_mut(&mut self, entity_id: EntityId) -> Result<&mut EntityRecord<T>, WorldError> {
        self.check_valid()?;
        self.directory
            .get_mut(&entity_id)
            .ok_or(WorldError::EntityNotTracked { entity_id })
    }
}

impl<T> Default for World<T> {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}
