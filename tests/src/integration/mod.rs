//! Cross-crate integration flows.

pub mod ledger_flows;
pub mod provenance_flows;
