use std::default::Default;

use crate::{grid::chunk_offset::ChunkOffset, types::Axes};

/// Shape of the chunk grid: how large each chunk is in world units, how
/// many chunks each axis holds, and where each axis is anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    // neither size nor count is ever 0 on any axis
    pub(crate) chunk_size: Axes<u16>,
    pub(crate) chunk_count: Axes<u16>,
    pub(crate) chunk_offset: Axes<ChunkOffset>,
}

impl GridConfig {
    pub fn new(
        chunk_size: Axes<u16>,
        chunk_count: Axes<u16>,
        chunk_offset: Axes<ChunkOffset>,
    ) -> Self {
        let mut config = Self {
            chunk_size,
            chunk_count,
            chunk_offset,
        };
        config.set_chunk_size(chunk_size);
        config.set_chunk_count(chunk_count);
        config
    }

    /// World units covered by one chunk, per axis.
    pub fn chunk_size(&self) -> Axes<u16> {
        self.chunk_size
    }

    /// Number of chunks per axis.
    pub fn chunk_count(&self) -> Axes<u16> {
        self.chunk_count
    }

    pub fn chunk_offset(&self) -> Axes<ChunkOffset> {
        self.chunk_offset
    }

    /// Zero on any axis is stored as 1.
    pub fn set_chunk_size(&mut self, chunk_size: Axes<u16>) {
        self.chunk_size = chunk_size.map(at_least_one);
    }

    /// Zero on any axis is stored as 1; a grid always has a cell per axis.
    pub fn set_chunk_count(&mut self, chunk_count: Axes<u16>) {
        self.chunk_count = chunk_count.map(at_least_one);
    }

    pub fn set_chunk_offset(&mut self, chunk_offset: Axes<ChunkOffset>) {
        self.chunk_offset = chunk_offset;
    }

    /// Total number of chunks in the grid.
    pub fn volume(&self) -> i64 {
        i64::from(self.chunk_count.x) * i64::from(self.chunk_count.y) * i64::from(self.chunk_count.z)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            chunk_size: Axes::splat(16),
            chunk_count: Axes::splat(256),
            chunk_offset: Axes::splat(ChunkOffset::Middle),
        }
    }
}

fn at_least_one(value: u16) -> u16 {
    value.max(1)
}
