//! Two-legged tie resolution.
//!
//! Decides a home-and-away tie with the classic rule chain:
//!
//! - **Aggregate**: most goals over both legs wins.
//! - **Away goals**: on a level aggregate, most goals scored as the
//!   visiting side wins (can be disabled).
//!
//! In leg 1 the first team hosts; in leg 2 the roles reverse. There are
//! no further tie-breaks (extra time, penalties, seeding).
//!
//! Dynamic input (`{ teams?, games }`) is validated by [`parse_fixture`]
//! before any scoring runs. Typed input goes straight to [`evaluate`].

mod config;
mod engine;
mod types;
mod validate;

pub use config::TieOptions;
pub use engine::{evaluate, evaluate_all, resolve, resolve_str, shape, winner};
pub use types::{Decision, Fixture, Leg, Outcome, Reason, Side, Tally, TeamPair};
pub use validate::parse_fixture;
