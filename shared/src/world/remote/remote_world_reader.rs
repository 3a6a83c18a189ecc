use std::any::Any;

use log::{debug, warn};

use gridrep_serde::{ByteReader, Serde};

use crate::{
    types::{EntityId, OwnerId},
    world::{
        entity::entity_directory::EntityDirectory,
        event::{
            handler_table::HandlerTable,
            read_event::{ReadEvent, ReadEventKind, ReadReply},
        },
        remote::error::ReadError,
        replication_world::World,
        segment::{EntryHeader, SectionHeader, SectionKind, SECTION_HEADER_BYTES},
    },
};

impl<T> World<T> {
    /// Applies every section in `buffer` to this world, calling the read
    /// handlers for each entry.
    ///
    /// Created entities are marked foreign. Each section is checked against
    /// its header before any of its entries is applied.
    pub fn read_view(
        &mut self,
        owner_id: OwnerId,
        buffer: &[u8],
        userdata: Option<&mut dyn Any>,
    ) -> Result<(), ReadError> {
        if !self.is_valid() {
            return Err(ReadError::WorldInvalid);
        }

        RemoteWorldReader::read_sections(
            &mut self.directory,
            &mut self.handlers,
            owner_id,
            buffer,
            userdata,
        )
    }
}

pub struct RemoteWorldReader;

impl RemoteWorldReader {
    pub fn read_sections<T>(
        directory: &mut EntityDirectory<T>,
        handlers: &mut HandlerTable<T>,
        owner_id: OwnerId,
        buffer: &[u8],
        mut userdata: Option<&mut dyn Any>,
    ) -> Result<(), ReadError> {
        let mut reader = ByteReader::new(buffer);

        while reader.remaining() >= SECTION_HEADER_BYTES {
            let offset = reader.position();
            let header = SectionHeader::de(&mut reader)?;
            let kind = header.section_kind().ok_or(ReadError::Malformed {
                offset,
                reason: "unknown section kind",
            })?;

            let body = reader.read_bytes(header.size as usize)?;
            let entries = Self::split_entries(body, header.amount, offset)?;

            debug!(
                "reading {kind:?} section for owner {owner_id}: {} entries",
                entries.len()
            );

            for (entry, payload) in entries {
                Self::read_entry(
                    directory,
                    handlers,
                    kind,
                    owner_id,
                    entry.entity_id,
                    payload,
                    userdata.as_deref_mut(),
                )?;
            }
        }

        if !reader.is_empty() {
            return Err(ReadError::TrailingBytes {
                remaining: reader.remaining(),
            });
        }

        Ok(())
    }

    /// Cuts a section body into its entries, requiring them to fill it
    /// exactly.
    fn split_entries(
        body: &[u8],
        amount: u16,
        offset: usize,
    ) -> Result<Vec<(EntryHeader, &[u8])>, ReadError> {
        let overrun = ReadError::Malformed {
            offset,
            reason: "entries run past the section size",
        };

        let mut reader = ByteReader::new(body);
        let mut entries = Vec::with_capacity(amount as usize);

        for _ in 0..amount {
            let entry = EntryHeader::de(&mut reader).map_err(|_| overrun.clone())?;
            let payload = reader
                .read_bytes(entry.size as usize)
                .map_err(|_| overrun.clone())?;
            entries.push((entry, payload));
        }

        if !reader.is_empty() {
            return Err(ReadError::Malformed {
                offset,
                reason: "section size exceeds its entries",
            });
        }

        Ok(entries)
    }

    #[allow(clippy::too_many_arguments)]
    fn read_entry<T>(
        directory: &mut EntityDirectory<T>,
        handlers: &mut HandlerTable<T>,
        kind: SectionKind,
        owner_id: OwnerId,
        entity_id: EntityId,
        payload: &[u8],
        userdata: Option<&mut dyn Any>,
    ) -> Result<(), ReadError> {
        let event_kind = match kind {
            SectionKind::Create => {
                if directory.insert(entity_id) {
                    if let Some(record) = directory.get_mut(&entity_id) {
                        record.foreign = true;
                    }
                    ReadEventKind::Create
                } else {
                    ReadEventKind::ErrorCreate
                }
            }
            SectionKind::Update => {
                if directory
                    .get(&entity_id)
                    .is_some_and(|record| record.is_foreign())
                {
                    ReadEventKind::Update
                } else {
                    ReadEventKind::ErrorUpdate
                }
            }
            SectionKind::Remove => {
                if directory.contains(&entity_id) {
                    ReadEventKind::Remove
                } else {
                    ReadEventKind::ErrorRemove
                }
            }
        };

        if event_kind.is_error() {
            Self::warn_error_event(event_kind, entity_id);
        }

        if let Some(handler) = handlers.read_mut(event_kind) {
            let mut event = ReadEvent {
                kind: event_kind,
                owner_id,
                entity_id,
                entity: directory.get_mut(&entity_id),
                payload: ByteReader::new(payload),
                userdata,
            };

            if let ReadReply::Abort(code) = handler.on_read(&mut event) {
                // an aborted create leaves no entity behind
                if event_kind == ReadEventKind::Create {
                    directory.remove(&entity_id);
                }
                return Err(ReadError::Aborted { entity_id, code });
            }
        }

        if event_kind == ReadEventKind::Remove {
            directory.remove(&entity_id);
        }

        Ok(())
    }

    fn warn_error_event(event_kind: ReadEventKind, entity_id: EntityId) {
        match event_kind {
            ReadEventKind::ErrorCreate => {
                warn!("Section Read Error: create for entity {entity_id}, which is already tracked")
            }
            ReadEventKind::ErrorUpdate => {
                warn!("Section Read Error: update for entity {entity_id}, which is not a tracked foreign entity")
            }
            ReadEventKind::ErrorRemove => {
                warn!("Section Read Error: remove for entity {entity_id}, which is not tracked")
            }
            _ => {}
        }
    }
}
