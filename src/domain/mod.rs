//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `workout` - Logged sessions and sets, ingestion validation
//! - `stats` - Pure aggregation over logged sessions and sets
//! - `program` - Day rotation, program catalog and week progress
//! - `access` - Shared-secret access gate

pub mod access;
pub mod foundation;
pub mod program;
pub mod stats;
pub mod workout;
