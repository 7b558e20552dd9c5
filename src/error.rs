//! Crate-wide error type.
use std::fmt;

/// Errors surfaced by this crate's fallible operations.
///
/// Grouped into the same three categories across every protocol
/// (signing, key agreement, encryption): a caller mistake
/// ([`Sm2Error::InvalidInput`]), a protocol precondition that failed at
/// runtime ([`Sm2Error::ProtocolAbort`]), and data that decoded but
/// didn't match an expected check value ([`Sm2Error::IntegrityFailure`]).
/// Signature verification is not part of this taxonomy: `verify` reports
/// accept/reject as a `bool`, not a `Result`, so there is no
/// corresponding error variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sm2Error {
    /// A caller-supplied value was out of range or malformed, e.g. a
    /// scalar not in `[1, n-1]` or a byte slice of the wrong length.
    InvalidInput(&'static str),
    /// A protocol step could not complete, e.g. a random nonce `k`
    /// that happened to produce a point at infinity and must be
    /// re-drawn, or a point that does not lie on the curve.
    ProtocolAbort(&'static str),
    /// A derived check value (KDF output, MAC, `C3` hash) did not match
    /// what was expected.
    IntegrityFailure,
}

impl fmt::Display for Sm2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sm2Error::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Sm2Error::ProtocolAbort(msg) => write!(f, "protocol aborted: {msg}"),
            Sm2Error::IntegrityFailure => write!(f, "integrity check failed"),
        }
    }
}

impl std::error::Error for Sm2Error {}
