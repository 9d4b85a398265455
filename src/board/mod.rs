//! Live board state.
//!
//! ## Key Types
//!
//! - `BoardState`: position -> tile occupancy over a fixed layout
//! - `MoveError`: recoverable gameplay errors (out of bounds, vacant,
//!   not exposed, same position twice)
//!
//! Exposure is derived on demand; `remove` is the only public mutation
//! and enforces the free-tile precondition.

pub mod state;

pub use state::{BoardState, MoveError};
