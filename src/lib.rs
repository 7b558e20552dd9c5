//! A self-contained SM2/SM3 cryptography suite.
//!
//! This crate provides a from-scratch, dependency-light implementation
//! of China's commercial cryptography standards: the SM3 hash function
//! and the three SM2 public-key protocols (signatures, key agreement,
//! and encryption), built on a fixed-width 256-bit modular arithmetic
//! layer and a Jacobian-coordinate elliptic-curve group.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Core
//! arithmetic is dependency-free, explicit in its semantics, and
//! intended to be easy to check against the GB/T 32918 / 32905 standards
//! it implements.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size multi-precision integers, `BigInt256` and `BigInt512`,
//!   the arithmetic foundation everything else reduces to.
//!
//! - `field`
//!   Modular arithmetic (`fp_add`/`fp_sub`/`fp_mul`/`fp_sqr`) over an
//!   explicit prime modulus.
//!
//! - `curve`
//!   The SM2 elliptic-curve group: curve parameters, affine points, and
//!   Jacobian-coordinate point addition, doubling, and scalar
//!   multiplication.
//!
//! - `hash`
//!   The SM3 cryptographic hash function, streaming and one-shot.
//!
//! - `kdf`
//!   Counter-mode key derivation over SM3, used by key agreement and
//!   encryption.
//!
//! - `sm2`
//!   The three SM2 protocols: digital signatures, one-sided key
//!   agreement, and public-key encryption, plus the key types and `ZA`
//!   identity-binding preamble they share.
//!
//! - `rng`
//!   A ChaCha20-based CSPRNG seeded from OS entropy, used only by
//!   convenience key/nonce constructors — every core protocol operation
//!   still takes its nonce explicitly from the caller.
//!
//! - `os`
//!   Per-platform entropy bindings backing `rng`.
//!
//! - `error`
//!   The crate-wide `Sm2Error` taxonomy.
//!
//! # Design goals
//!
//! - No heap allocation in the arithmetic and curve layers
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics matched against a known-correct
//!   reference for every formula
//!
//! This crate is not intended to replace full-featured, externally
//! audited cryptographic libraries; it carries none of the
//! constant-time hardening a production deployment would need (see
//! `DESIGN.md`).

pub mod curve;
pub mod error;
pub mod field;
pub mod hash;
pub mod kdf;
pub mod os;
pub mod primitives;
pub mod rng;
pub mod sm2;
