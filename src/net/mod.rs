//! Network layer: wire types, the remote analysis client, and the mocked
//! services that stand in for backends that do not exist yet.

pub mod api;
pub mod error;
pub mod mock;
pub mod types;
