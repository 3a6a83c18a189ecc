pub mod entity;
pub mod error;
pub mod event;
pub mod host;
pub mod query;
pub mod remote;
pub mod replication_world;
pub mod segment;
pub mod world_config;
