//! Deal generation and board-level scans.
//!
//! ## Key Types
//!
//! - `DealGenerator`: produces initial boards (`random` or `solvable`)
//! - `is_stuck` / `find_match`: exposed-pair scans
//! - `shuffle_remaining`: stuck recovery over the occupied positions

pub mod generator;

pub use generator::{
    find_match, is_stuck, shuffle_remaining, DealError, DealGenerator,
};
