//! Hash algorithms exposed by the crate.
//!
//! Currently includes SM3, a pure-Rust implementation used throughout
//! [`crate::kdf`] and [`crate::sm2`].

pub mod sm3;

/// Re-export of the SM3 convenience function and streaming type.
pub use sm3::{sm3, Sm3};
