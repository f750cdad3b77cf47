#![doc = "Monotonic clock sources producing sectime time values."]

pub mod manual;
pub mod monotonic;
pub mod source;

pub use manual::*;
pub use monotonic::*;
pub use source::*;
