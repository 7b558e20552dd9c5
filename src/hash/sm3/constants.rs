//! SM3 fixed constants (GB/T 32905-2016).

/// Initial hash value, loaded into [`super::core::Sm3`] on `init`.
pub const IV: [u32; 8] = [
    0x7380166F, 0x4914B2B9, 0x172442D7, 0xDA8A0600, 0xA96F30BC, 0x163138AA, 0xE38DEE4D,
    0xB0FB0E4E,
];

/// Round constant for rounds 0-15.
pub const T0: u32 = 0x79CC4519;

/// Round constant for rounds 16-63.
pub const T1: u32 = 0x7A879D8A;
