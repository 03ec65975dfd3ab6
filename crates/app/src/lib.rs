//! Shared application domain: records, in-memory stores and resource services.

pub mod context;
pub mod domain;

#[cfg(test)]
mod test;
