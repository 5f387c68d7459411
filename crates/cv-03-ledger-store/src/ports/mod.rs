//! Ports: the traits that decouple the ledger service from its callers
//! (inbound) and from the storage engine and clock (outbound).

pub mod inbound;
pub mod outbound;
