//! Engine adapters behind the [`KeyValueEngine`](crate::ports::outbound::KeyValueEngine) port.

pub mod memory;
pub mod rocks;
