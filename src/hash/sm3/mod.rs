//! SM3 cryptographic hash function (GB/T 32905-2016).
//!
//! A Merkle–Damgård construction over a dedicated 64-round compression
//! function, structurally close to SHA-256 but with its own permutation
//! and boolean functions and, distinctively, XOR rather than addition
//! for the feedback step.

mod computations;
mod constants;
mod core;

pub use self::core::{sm3, Sm3};
