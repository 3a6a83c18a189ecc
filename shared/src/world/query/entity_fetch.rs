use crate::{
    types::{ChunkId, EntityId, OwnerId},
    world::{
        entity::entity_record::EntityRecord, error::WorldError, query::fetch::Fetch,
        replication_world::World,
    },
};

// Plain directory scans, independent of interest and visibility.
impl<T> World<T> {
    pub fn fetch_all(&self, out: &mut [EntityId]) -> Result<Fetch, WorldError> {
        self.fetch_matching(out, |_| true)
    }

    pub fn fetch_chunk(&self, chunk: ChunkId, out: &mut [EntityId]) -> Result<Fetch, WorldError> {
        self.fetch_chunk_array(&[chunk], out)
    }

    /// Entities occupying any of `chunks`, in every dimension.
    pub fn fetch_chunk_array(
        &self,
        chunks: &[ChunkId],
        out: &mut [EntityId],
    ) -> Result<Fetch, WorldError> {
        self.fetch_matching(out, |record| {
            record
                .chunks()
                .as_slice()
                .iter()
                .any(|chunk| chunks.contains(chunk))
        })
    }

    pub fn fetch_owner(&self, owner_id: OwnerId, out: &mut [EntityId]) -> Result<Fetch, WorldError> {
        self.fetch_owner_array(&[owner_id], out)
    }

    pub fn fetch_owner_array(
        &self,
        owner_ids: &[OwnerId],
        out: &mut [EntityId],
    ) -> Result<Fetch, WorldError> {
        self.fetch_matching(out, |record| {
            record
                .owner()
                .is_some_and(|owner_id| owner_ids.contains(&owner_id))
        })
    }

    fn fetch_matching(
        &self,
        out: &mut [EntityId],
        predicate: impl Fn(&EntityRecord<T>) -> bool,
    ) -> Result<Fetch, WorldError> {
        self.check_valid()?;
        let matches: Vec<EntityId> = self
            .directory
            .iter()
            .filter(|record| predicate(record))
            .map(|record| record.id())
            .collect();
        Ok(Fetch::copy_into(&matches, out))
    }
}
