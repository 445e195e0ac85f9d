//! License Types
//!
//! Data structures for license verification.

pub mod config;
pub mod key;
pub mod payload;
pub mod status;

pub use config::*;
pub use key::*;
pub use payload::*;
pub use status::*;
