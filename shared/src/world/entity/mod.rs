pub mod chunk_list;
pub mod entity_directory;
pub mod entity_record;
pub mod visibility;
