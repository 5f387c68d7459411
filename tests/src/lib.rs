//! # CraftVault Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-crate choreography
//!     ├── ledger_flows.rs     # put/get/history/delete/stream end to end
//!     └── provenance_flows.rs # validator + cascade against real payloads
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cv-tests
//!
//! # By category
//! cargo test -p cv-tests integration::
//!
//! # Benchmarks
//! cargo bench -p cv-tests
//! ```

#![allow(dead_code)]

pub mod integration;
