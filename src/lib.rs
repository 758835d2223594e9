//! Two-legged tie resolution.
//!
//! Decides the winner of a home-and-away tie from the two legs' scores:
//!
//! - **Aggregate**: the side with more goals over both legs goes through.
//! - **Away goals**: on a level aggregate, the side that scored more as
//!   the visitor goes through. Optional.
//! - Otherwise the tie is reported as level, with the reason.
//!
//! The result is either a full [`tie::Decision`] (winner and reason) or
//! the winning label alone, selected by [`tie::TieOptions`].
//!
//! # Architecture
//!
//! Pure and synchronous. Malformed input is rejected with a
//! [`TieError`] before any scoring runs; there is no I/O and no shared
//! state. The `wasm` feature exposes the same call to JavaScript and
//! `parallel` resolves batches with rayon.

pub mod error;
pub mod tie;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, TieError};
