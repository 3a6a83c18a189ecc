use std::collections::{HashMap, HashSet};

use crate::{
    types::{ChunkId, Dimension, EntityId, OwnerId},
    world::{
        entity::{entity_record::EntityRecord, visibility::Visibility},
        error::WorldError,
        query::fetch::Fetch,
        replication_world::World,
    },
};

impl<T> World<T> {
    /// Collects the entities `owner_id` is interested in.
    ///
    /// Entities the owner owns come first. After them come entities that
    /// share a dimension with one of the owner's observers and occupy one of
    /// its chunks. With `radius` set, each observer chunk widens to every
    /// chunk within that many chunks of it. Visibility overrides can force
    /// other owners' entities in or out.
    ///
    /// Every tracked entity is checked, so `total` is the exact size of the
    /// interest set even when only a prefix fits in `out`.
    pub fn query(
        &self,
        owner_id: OwnerId,
        radius: Option<u8>,
        out: &mut [EntityId],
    ) -> Result<Fetch, WorldError> {
        self.check_valid()?;
        let results = self.interest_set(owner_id, radius);
        Ok(Fetch::copy_into(&results, out))
    }

    /// Interest set of `owner_id`, owned entities first, then matches in
    /// storage order.
    pub(crate) fn interest_set(&self, owner_id: OwnerId, radius: Option<u8>) -> Vec<EntityId> {
        let mut results: Vec<EntityId> = self
            .directory
            .iter()
            .filter(|record| record.is_owned_by(owner_id))
            .map(|record| record.id())
            .collect();

        let interest = self.interest_chunks(owner_id, radius);
        for record in self.directory.iter() {
            if record.is_owned_by(owner_id) {
                continue;
            }
            if is_visible(record, owner_id, &interest) {
                results.push(record.id());
            }
        }

        results
    }

    /// Chunks observed by `owner_id`'s entities, per dimension.
    fn interest_chunks(
        &self,
        owner_id: OwnerId,
        radius: Option<u8>,
    ) -> HashMap<Dimension, HashSet<ChunkId>> {
        let mut interest: HashMap<Dimension, HashSet<ChunkId>> = HashMap::new();

        let observers = self.directory.iter().filter(|record| {
            record.is_owned_by(owner_id) && record.is_observer() && !record.chunks().is_empty()
        });

        for observer in observers {
            let chunks = interest.entry(observer.dimension()).or_default();
            for chunk in observer.chunks().as_slice() {
                match radius {
                    Some(radius) => chunks.extend(self.config.grid.chunk_range(*chunk, radius)),
                    None => {
                        chunks.insert(*chunk);
                    }
                }
            }
        }

        interest
    }
}

fn is_visible<T>(
    record: &EntityRecord<T>,
    owner_id: OwnerId,
    interest: &HashMap<Dimension, HashSet<ChunkId>>,
) -> bool {
    match record.visibility_for(owner_id) {
        Visibility::Always => true,
        Visibility::Never => false,
        Visibility::Default => interest
            .get(&record.dimension())
            .is_some_and(|chunks| {
                record
                    .chunks()
                    .as_slice()
                    .iter()
                    .any(|chunk| chunks.contains(chunk))
            }),
    }
}
