pub mod handler_table;
pub mod read_event;
pub mod write_event;
