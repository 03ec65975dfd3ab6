//! Tally Domain Concerns

pub mod products;
pub mod records;
pub mod store;
pub mod users;
