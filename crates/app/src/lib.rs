//! Shared application domain and storage modules.

pub mod context;
pub mod domain;

mod uuids;
