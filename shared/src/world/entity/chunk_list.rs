use crate::{
    grid::grid_config::GridConfig,
    types::{ChunkId, MAX_ENTITY_CHUNKS},
};

/// The chunks an entity occupies: a fixed-capacity list holding only valid
/// chunk ids, with an explicit length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkList {
    len: u8,
    chunks: [ChunkId; MAX_ENTITY_CHUNKS],
}

impl ChunkList {
    pub fn new() -> Self {
        Self {
            len: 0,
            chunks: [0; MAX_ENTITY_CHUNKS],
        }
    }

    /// Builds a list from `chunks`, stopping at the first id that is not a
    /// valid chunk of `grid`. The caller guarantees `chunks.len()` fits.
    pub(crate) fn from_prefix(grid: &GridConfig, chunks: &[ChunkId]) -> Self {
        let mut list = Self::new();
        for chunk in chunks.iter().take(MAX_ENTITY_CHUNKS) {
            if !grid.is_valid_chunk(*chunk) {
                break;
            }
            list.chunks[list.len as usize] = *chunk;
            list.len += 1;
        }
        list
    }

    /// Drops every chunk from the first one `grid` no longer accepts.
    pub(crate) fn retain_valid_prefix(&mut self, grid: &GridConfig) {
        *self = Self::from_prefix(grid, self.as_slice());
    }

    pub fn as_slice(&self) -> &[ChunkId] {
        &self.chunks[..self.len as usize]
    }

    pub fn first(&self) -> Option<ChunkId> {
        self.as_slice().first().copied()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, chunk: ChunkId) -> bool {
        self.as_slice().contains(&chunk)
    }
}

impl Default for ChunkList {
    fn default() -> Self {
        Self::new()
    }
}
