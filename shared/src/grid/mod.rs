pub mod chunk_index;
pub mod chunk_offset;
pub mod grid_config;
