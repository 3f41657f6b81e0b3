//! berth
//!
//! Custom command menus for a terminal container dashboard. This crate
//! re-exports [`berth_core`]; the `berth` binary lives in `crates/berth-cli`.

pub use berth_core::*;
