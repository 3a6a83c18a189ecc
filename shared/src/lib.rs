//! # Gridrep Shared
//! Area-of-interest replication: a chunk grid, an entity directory, per-owner
//! interest queries, and the section writer & reader that replicate changes
//! to what each owner sees.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use gridrep_serde::{
    ByteReader, ByteWrite, ByteWriter, ConstByteLength, Serde, SerdeErr, StreamWriter,
};

mod grid;
mod types;
mod world;

pub use grid::{chunk_offset::ChunkOffset, grid_config::GridConfig};
pub use types::{Axes, ChunkId, Dimension, EntityId, OwnerId, MAX_ENTITY_CHUNKS};
pub use world::{
    entity::{
        chunk_list::ChunkList, entity_directory::EntityDirectory, entity_record::EntityRecord,
        visibility::Visibility,
    },
    error::WorldError,
    event::{
        handler_table::HandlerTable,
        read_event::{ReadEvent, ReadEventKind, ReadHandler, ReadReply},
        write_event::{WriteEvent, WriteHandler, WriteReply},
    },
    host::{host_world_writer::HostWorldWriter, sent_tracker::SentTracker},
    query::fetch::Fetch,
    remote::{error::ReadError, remote_world_reader::RemoteWorldReader},
    replication_world::World,
    segment::{
        section_length, EntryHeader, SectionHeader, SectionKind, ENTRY_HEADER_BYTES,
        MAX_ENTRY_PAYLOAD, SECTION_HEADER_BYTES,
    },
    world_config::WorldConfig,
};
