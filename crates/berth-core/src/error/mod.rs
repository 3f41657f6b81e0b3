//! Error types for berth
//!
//! Every failure the dispatcher can detect is described by [`BerthError`].
//! Routine failures are turned into error panels by the dispatcher before they
//! reach the host; the variants here are what the host sees when that is not
//! possible (panel display failed, menu could not be presented, bad config).

mod constructors;
mod conversions;
mod types;


pub use types::{BerthError, BerthResult};
