pub mod entity_fetch;
pub mod fetch;
pub mod interest_query;
