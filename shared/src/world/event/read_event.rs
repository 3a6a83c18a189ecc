use std::any::Any;

use gridrep_serde::ByteReader;

use crate::{
    types::{EntityId, OwnerId},
    world::entity::entity_record::EntityRecord,
};

/// What the reader is doing with an entry when it calls a read handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadEventKind {
    Create,
    Update,
    Remove,
    /// A create arrived for an id that is already tracked.
    ErrorCreate,
    /// An update arrived for an id that is untracked or not foreign.
    ErrorUpdate,
    /// A remove arrived for an id that is not tracked.
    ErrorRemove,
}

impl ReadEventKind {
    pub const ALL: [ReadEventKind; 6] = [
        ReadEventKind::Create,
        ReadEventKind::Update,
        ReadEventKind::Remove,
        ReadEventKind::ErrorCreate,
        ReadEventKind::ErrorUpdate,
        ReadEventKind::ErrorRemove,
    ];

    pub fn is_error(self) -> bool {
        matches!(
            self,
            ReadEventKind::ErrorCreate | ReadEventKind::ErrorUpdate | ReadEventKind::ErrorRemove
        )
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ReadEventKind::Create => 0,
            ReadEventKind::Update => 1,
            ReadEventKind::Remove => 2,
            ReadEventKind::ErrorCreate => 3,
            ReadEventKind::ErrorUpdate => 4,
            ReadEventKind::ErrorRemove => 5,
        }
    }
}

/// Handed to a read handler for each entry of a section.
pub struct ReadEvent<'a, T> {
    pub kind: ReadEventKind,
    /// The owner id passed to the read call, not the writer's.
    pub owner_id: OwnerId,
    pub entity_id: EntityId,
    /// The local record, when the id is tracked.
    pub entity: Option<&'a mut EntityRecord<T>>,
    /// The entry payload and nothing past it.
    pub payload: ByteReader<'a>,
    pub userdata: Option<&'a mut (dyn Any + 'static)>,
}

impl<T> ReadEvent<'_, T> {
    /// The per-call user data, if it is a `U`.
    pub fn userdata_mut<U: Any>(&mut self) -> Option<&mut U> {
        self.userdata.as_deref_mut()?.downcast_mut::<U>()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadReply {
    Continue,
    /// Stop reading; the code is reported back to the caller.
    Abort(i32),
}

pub trait ReadHandler<T> {
    fn on_read(&mut self, event: &mut ReadEvent<'_, T>) -> ReadReply;
}

impl<T, F> ReadHandler<T> for F
where
    F: FnMut(&mut ReadEvent<'_, T>) -> ReadReply,
{
    fn on_read(&mut self, event: &mut ReadEvent<'_, T>) -> ReadReply {
        self(event)
    }
}
