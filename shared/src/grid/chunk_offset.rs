/// Where coordinate 0 sits along one axis of the chunk grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChunkOffset {
    /// Coordinate 0 is the first chunk; the grid spans `0..count`.
    Begin,
    /// Coordinate 0 is the middle chunk; the grid is centered on the origin.
    #[default]
    Middle,
    /// Coordinate 0 lies just past the last chunk; the grid spans `-count..0`.
    End,
}

impl ChunkOffset {
    pub const RAW_BEGIN: i16 = i16::MIN;
    pub const RAW_MIDDLE: i16 = 0;
    pub const RAW_END: i16 = i16::MAX;

    /// Shifts a caller-space chunk coordinate into grid space for an axis
    /// holding `count` chunks. The result may fall outside `0..count`, and
    /// is widened so that no `i32` coordinate can overflow it.
    pub fn shift(self, coord: i32, count: u16) -> i64 {
        let coord = i64::from(coord);
        match self {
            ChunkOffset::Begin => coord,
            ChunkOffset::Middle => coord + i64::from(count) / 2,
            ChunkOffset::End => coord + i64::from(count),
        }
    }
}

impl From<i16> for ChunkOffset {
    /// Any value other than the middle/end markers anchors at the beginning.
    fn from(raw: i16) -> Self {
        match raw {
            ChunkOffset::RAW_MIDDLE => ChunkOffset::Middle,
            ChunkOffset::RAW_END => ChunkOffset::End,
            _ => ChunkOffset::Begin,
        }
    }
}

impl From<ChunkOffset> for i16 {
    fn from(offset: ChunkOffset) -> Self {
        match offset {
            ChunkOffset::Begin => ChunkOffset::RAW_BEGIN,
            ChunkOffset::Middle => ChunkOffset::RAW_MIDDLE,
            ChunkOffset::End => ChunkOffset::RAW_END,
        }
    }
}
