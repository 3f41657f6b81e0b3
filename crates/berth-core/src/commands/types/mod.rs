//! Custom command type definitions

mod context;
mod option;
mod outcome;

pub use context::{CommandObject, ContainerRef, ImageRef, NetworkRef, ServiceRef, VolumeRef};
pub use option::{CommandAction, CommandOption};
pub use outcome::MenuOutcome;

#[cfg(test)]
mod tests;
