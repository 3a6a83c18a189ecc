use std::any::Any;

use gridrep_serde::ByteWriter;

use crate::{
    types::{EntityId, OwnerId},
    world::{entity::entity_record::EntityRecord, segment::SectionKind},
};

/// Handed to a write handler for each candidate entry of a section.
pub struct WriteEvent<'a, T> {
    pub kind: SectionKind,
    pub owner_id: OwnerId,
    pub entity_id: EntityId,
    /// `None` for removes of entities that are no longer tracked.
    pub entity: Option<&'a EntityRecord<T>>,
    /// Bounded view over the space left in the caller's buffer. Whatever is
    /// written here becomes the entry payload.
    pub payload: ByteWriter<'a>,
    pub userdata: Option<&'a mut (dyn Any + 'static)>,
}

impl<T> WriteEvent<'_, T> {
    /// The per-call user data, if it is a `U`.
    pub fn userdata_mut<U: Any>(&mut self) -> Option<&mut U> {
        self.userdata.as_deref_mut()?.downcast_mut::<U>()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteReply {
    /// Commit the entry with the bytes written to the payload.
    Accept,
    /// Leave the entity out of this section without changing its sent state.
    Reject,
}

pub trait WriteHandler<T> {
    fn on_write(&mut self, event: &mut WriteEvent<'_, T>) -> WriteReply;
}

impl<T, F> WriteHandler<T> for F
where
    F: FnMut(&mut WriteEvent<'_, T>) -> WriteReply,
{
    fn on_write(&mut self, event: &mut WriteEvent<'_, T>) -> WriteReply {
        self(event)
    }
}
