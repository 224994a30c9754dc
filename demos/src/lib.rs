//! Support code for the `gridpath` demo binary.

pub mod config;
pub mod session;

pub use config::{ConfigError, Constants, Settings};
pub use session::{NextAction, Session};
