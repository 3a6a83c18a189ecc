use std::{any::Any, collections::HashSet};

use log::{debug, warn};

use gridrep_serde::{ByteWriter, Serde};

use crate::{
    types::{EntityId, OwnerId},
    world::{
        entity::entity_directory::EntityDirectory,
        error::WorldError,
        event::{
            handler_table::HandlerTable,
            write_event::{WriteEvent, WriteReply},
        },
        host::sent_tracker::SentTracker,
        replication_world::World,
        segment::{
            EntryHeader, SectionHeader, SectionKind, ENTRY_HEADER_BYTES, MAX_ENTRY_PAYLOAD,
            SECTION_HEADER_BYTES,
        },
    },
};

impl<T> World<T> {
    /// Writes the next section of changes to what `owner_id` is interested
    /// in, returning how many bytes of `buffer` it used.
    ///
    /// Each call emits a single section: removes while any previously sent
    /// entity left the interest set, otherwise creates while any interesting
    /// entity has not been sent, otherwise updates. Entries that do not fit
    /// are left for a later call. `Ok(0)` means there was nothing to write.
    pub fn write_view(
        &mut self,
        owner_id: OwnerId,
        buffer: &mut [u8],
        userdata: Option<&mut dyn Any>,
    ) -> Result<usize, WorldError> {
        self.check_valid()?;

        let interest = self.interest_set(owner_id, self.config.interest_radius);
        let mut tracker = self.sent.remove(&owner_id).unwrap_or_default();

        let written = HostWorldWriter::write_section(
            &self.directory,
            &mut self.handlers,
            &mut tracker,
            &interest,
            owner_id,
            buffer,
            userdata,
        );

        if !tracker.is_empty() {
            self.sent.insert(owner_id, tracker);
        }

        Ok(written)
    }
}

pub struct HostWorldWriter;

impl HostWorldWriter {
    #[allow(clippy::too_many_arguments)]
    pub fn write_section<T>(
        directory: &EntityDirectory<T>,
        handlers: &mut HandlerTable<T>,
        tracker: &mut SentTracker,
        interest: &[EntityId],
        owner_id: OwnerId,
        buffer: &mut [u8],
        mut userdata: Option<&mut dyn Any>,
    ) -> usize {
        let Some((kind, candidates)) = Self::pending_section(tracker, interest) else {
            return 0;
        };

        let capacity = buffer.len();
        let mut position = SECTION_HEADER_BYTES;
        let mut amount: u16 = 0;

        for entity_id in candidates {
            // check that the entry header fits before offering the payload space
            if position + ENTRY_HEADER_BYTES > capacity {
                if amount == 0 {
                    Self::warn_overflow_entry(kind, entity_id, capacity.saturating_sub(position));
                }
                break;
            }
            if amount == u16::MAX {
                break;
            }

            let payload_start = position + ENTRY_HEADER_BYTES;
            let payload_end = capacity.min(payload_start + MAX_ENTRY_PAYLOAD);

            let payload_length = match handlers.write_mut(kind) {
                Some(handler) => {
                    let mut event = WriteEvent {
                        kind,
                        owner_id,
                        entity_id,
                        entity: directory.get(&entity_id),
                        payload: ByteWriter::new(&mut buffer[payload_start..payload_end]),
                        userdata: userdata.as_deref_mut(),
                    };

                    let reply = handler.on_write(&mut event);
                    if reply == WriteReply::Reject {
                        continue;
                    }
                    if event.payload.overflowed() {
                        if amount == 0 {
                            Self::warn_overflow_payload(kind, entity_id, payload_end - payload_start);
                        }
                        break;
                    }
                    event.payload.bytes_written()
                }
                // nothing registered: commit an empty entry
                None => 0,
            };

            let header = EntryHeader {
                entity_id,
                size: payload_length as u16,
            };
            header.ser(&mut ByteWriter::new(&mut buffer[position..payload_start]));

            match kind {
                SectionKind::Create => {
                    tracker.insert(entity_id);
                }
                SectionKind::Remove => {
                    tracker.remove(&entity_id);
                }
                SectionKind::Update => {}
            }

            position = payload_start + payload_length;
            amount += 1;
        }

        if amount == 0 {
            return 0;
        }

        let size = (position - SECTION_HEADER_BYTES) as u32;
        SectionHeader::new(kind, amount, size)
            .ser(&mut ByteWriter::new(&mut buffer[..SECTION_HEADER_BYTES]));

        debug!("wrote {kind:?} section for owner {owner_id}: {amount} entries, {position} bytes");

        position
    }

    /// Picks the section kind to write and its candidates: removes first,
    /// then creates, then updates.
    fn pending_section(
        tracker: &SentTracker,
        interest: &[EntityId],
    ) -> Option<(SectionKind, Vec<EntityId>)> {
        let interest_set: HashSet<EntityId> = interest.iter().copied().collect();

        let removes = tracker.stale(&interest_set);
        if !removes.is_empty() {
            return Some((SectionKind::Remove, removes));
        }

        let (updates, creates): (Vec<EntityId>, Vec<EntityId>) = interest
            .iter()
            .copied()
            .partition(|entity_id| tracker.contains(entity_id));

        if !creates.is_empty() {
            return Some((SectionKind::Create, creates));
        }
        if !updates.is_empty() {
            return Some((SectionKind::Update, updates));
        }
        None
    }

    fn warn_overflow_entry(kind: SectionKind, entity_id: EntityId, bytes_free: usize) {
        warn!(
            "Section Write Error: {kind:?} entry for entity {entity_id} requires {ENTRY_HEADER_BYTES} bytes, but buffer only has {bytes_free} bytes available! Nothing was written."
        )
    }

    fn warn_overflow_payload(kind: SectionKind, entity_id: EntityId, bytes_free: usize) {
        warn!(
            "Section Write Error: {kind:?} payload for entity {entity_id} does not fit in the {bytes_free} bytes available! Nothing was written."
        )
    }
}
