// Rust guideline compliant 2026-02-06

//! Command implementations for the Stocklens CLI.
//!
//! Each submodule implements one `stk` subcommand on top of the
//! stocklens-core library.

pub mod exclusions;
pub mod groups;
pub mod levels;
pub mod low_stock;
pub mod out_of_stock;
pub mod report;
pub mod thresholds;
