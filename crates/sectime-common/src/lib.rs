#![doc = "Saturating nanosecond time values shared across the sectime workspace."]

pub mod config;
pub mod error;
pub mod interop;
pub mod time;

pub use config::*;
pub use error::*;
pub use interop::*;
pub use time::*;
