use crate::world::{
    event::{read_event::ReadEventKind, read_event::ReadHandler, write_event::WriteHandler},
    segment::SectionKind,
};

/// One optional handler slot per section kind and per read event kind.
pub struct HandlerTable<T> {
    write: [Option<Box<dyn WriteHandler<T>>>; 3],
    read: [Option<Box<dyn ReadHandler<T>>>; 6],
}

impl<T> HandlerTable<T> {
    pub fn new() -> Self {
        Self {
            write: [None, None, None],
            read: [None, None, None, None, None, None],
        }
    }

    /// Returns the handler previously registered for `kind`.
    pub fn set_write(
        &mut self,
        kind: SectionKind,
        handler: Box<dyn WriteHandler<T>>,
    ) -> Option<Box<dyn WriteHandler<T>>> {
        self.write[kind.index()].replace(handler)
    }

    pub fn remove_write(&mut self, kind: SectionKind) -> Option<Box<dyn WriteHandler<T>>> {
        self.write[kind.index()].take()
    }

    pub fn write_mut(&mut self, kind: SectionKind) -> Option<&mut (dyn WriteHandler<T> + 'static)> {
        self.write[kind.index()].as_deref_mut()
    }

    /// Returns the handler previously registered for `kind`.
    pub fn set_read(
        &mut self,
        kind: ReadEventKind,
        handler: Box<dyn ReadHandler<T>>,
    ) -> Option<Box<dyn ReadHandler<T>>> {
        self.read[kind.index()].replace(handler)
    }

    pub fn remove_read(&mut self, kind: ReadEventKind) -> Option<Box<dyn ReadHandler<T>>> {
        self.read[kind.index()].take()
    }

    pub fn read_mut(&mut self, kind: ReadEventKind) -> Option<&mut (dyn ReadHandler<T> + 'static)> {
        self.read[kind.index()].as_deref_mut()
    }

    pub fn clear(&mut self) {
        self.write.iter_mut().for_each(|slot| *slot = None);
        self.read.iter_mut().for_each(|slot| *slot = None);
    }
}

impl<T> Default for HandlerTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
