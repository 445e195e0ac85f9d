//! License Core Components
//!
//! Decoding and format checks used by the verifier.

pub mod date;
pub mod encoding;
pub mod legacy;

pub use date::*;
pub use encoding::*;
pub use legacy::*;
