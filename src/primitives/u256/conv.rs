use super::core::BigInt256;

impl BigInt256 {
    /// Serializes to 32 big-endian bytes, the layout used by hashing,
    /// signature encoding, and point coordinates.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for i in 0..8 {
            let limb = self.limbs[7 - i];
            out[i * 4..i * 4 + 4].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Parses 32 big-endian bytes into a value.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u32; 8];
        for i in 0..8 {
            let chunk: [u8; 4] = bytes[i * 4..i * 4 + 4].try_into().unwrap();
            limbs[7 - i] = u32::from_be_bytes(chunk);
        }
        Self { limbs }
    }

    /// Parses a byte slice of any length up to 32 as a big-endian value,
    /// left-padding with zero limbs. Used for variable-length hash
    /// digests and KDF inputs that are shorter than a full field element.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= 32, "BigInt256 cannot hold more than 32 bytes");
        let mut padded = [0u8; 32];
        let start = 32 - bytes.len();
        padded[start..].copy_from_slice(bytes);
        Self::from_be_bytes(&padded)
    }
}
