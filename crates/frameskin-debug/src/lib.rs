//! Debug front end for the frameskin stylesheet engine.
//!
//! Parses a stylesheet and an optional ad-hoc tree, then prints the
//! canonical stylesheet, the canonical tree, the paths of nodes matched by a
//! selector list, or the computed style of one node.

pub mod cli;
pub mod command;
pub mod error;

pub use cli::Cli;
pub use command::run;
pub use error::DebugError;
