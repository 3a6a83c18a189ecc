pub mod host_world_writer;
pub mod sent_tracker;
