
pub use fixtures::{CREATE_EXPECTED, UPDATE_EXPECTED};
pub use handlers::{mark_userdata, skip_payload, two_bytes, two_bytes_reject, zero_size};
pub use logging::init_logger;
pub use section_exchange::{exchange_section, exchange_until_settled};
pub use world_builder::{three_in_chunk_one, TestEntity, TestWorldBuilder};
