use crate::{
    grid::{chunk_offset::ChunkOffset, grid_config::GridConfig},
    types::{Axes, ChunkId},
};

impl GridConfig {
    /// Linear id of the chunk at caller-space chunk coordinate `(x, y, z)`,
    /// or `None` when any shifted axis falls outside the grid.
    pub fn chunk_from_coord(&self, x: i32, y: i32, z: i32) -> Option<ChunkId> {
        let cx = shifted_axis(self.chunk_offset.x, x, self.chunk_count.x)?;
        let cy = shifted_axis(self.chunk_offset.y, y, self.chunk_count.y)?;
        let cz = shifted_axis(self.chunk_offset.z, z, self.chunk_count.z)?;

        let count_x = i64::from(self.chunk_count.x);
        let count_y = i64::from(self.chunk_count.y);

        Some(cz * count_y * count_x + cy * count_x + cx)
    }

    /// Linear id of the chunk containing the world-space point `(x, y, z)`.
    /// Non-finite or out-of-range positions have no chunk.
    pub fn chunk_from_position(&self, x: f64, y: f64, z: f64) -> Option<ChunkId> {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return None;
        }

        // `as` truncates toward zero and saturates at the i32 bounds, which
        // lie outside any grid
        let cx = (x / f64::from(self.chunk_size.x)) as i32;
        let cy = (y / f64::from(self.chunk_size.y)) as i32;
        let cz = (z / f64::from(self.chunk_size.z)) as i32;

        self.chunk_from_coord(cx, cy, cz)
    }

    /// Caller-space chunk coordinate of `chunk_id`, the inverse of
    /// [`GridConfig::chunk_from_coord`].
    pub fn coord_from_chunk(&self, chunk_id: ChunkId) -> Option<Axes<i32>> {
        if !self.is_valid_chunk(chunk_id) {
            return None;
        }

        let count_x = i64::from(self.chunk_count.x);
        let count_y = i64::from(self.chunk_count.y);
        let layer = count_x * count_y;

        let cz = chunk_id / layer;
        let rest = chunk_id % layer;
        let cy = rest / count_x;
        let cx = rest % count_x;

        Some(Axes::new(
            unshifted_axis(self.chunk_offset.x, cx, self.chunk_count.x)?,
            unshifted_axis(self.chunk_offset.y, cy, self.chunk_count.y)?,
            unshifted_axis(self.chunk_offset.z, cz, self.chunk_count.z)?,
        ))
    }

    pub fn is_valid_chunk(&self, chunk_id: ChunkId) -> bool {
        chunk_id >= 0 && chunk_id < self.volume()
    }

    /// Every valid chunk whose coordinate lies inside the sphere of `radius`
    /// chunks around `center`, ordered by z, then y, then x. An invalid
    /// center yields nothing.
    pub fn chunk_range(&self, center: ChunkId, radius: u8) -> Vec<ChunkId> {
        let Some(origin) = self.coord_from_chunk(center) else {
            return Vec::new();
        };

        let r = i32::from(radius);
        let r_squared = r * r;
        let mut chunks = Vec::new();

        for dz in -r..=r {
            for dy in -r..=r {
                for dx in -r..=r {
                    if dx * dx + dy * dy + dz * dz > r_squared {
                        continue;
                    }
                    if let Some(chunk) =
                        self.chunk_from_coord(origin.x + dx, origin.y + dy, origin.z + dz)
                    {
                        chunks.push(chunk);
                    }
                }
            }
        }

        chunks
    }
}

fn shifted_axis(offset: ChunkOffset, coord: i32, count: u16) -> Option<i64> {
    let shifted = offset.shift(coord, count);
    if shifted < 0 || shifted >= i64::from(count) {
        return None;
    }
    Some(shifted)
}

fn unshifted_axis(offset: ChunkOffset, grid_coord: i64, count: u16) -> Option<i32> {
    i32::try_from(grid_coord - offset.shift(0, count)).ok()
}
