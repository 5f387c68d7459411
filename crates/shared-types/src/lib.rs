//! # Shared Types Crate
//!
//! Domain entities shared by the CraftVault ledger subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a crate boundary
//!   lives here (ledger records, change-log entries, sync messages).
//! - **Immutable history**: an [`InventoryEntry`] is never mutated in place;
//!   repairs produce a replacement entry.
//! - **Opaque payloads**: inventory bytes are carried verbatim. Parsing them
//!   is the job of `cv-01-item-model`; the ledger treats them as a blob so
//!   legacy encodings survive round-trip.

pub mod constants;
pub mod entities;

pub use constants::*;
pub use entities::*;
