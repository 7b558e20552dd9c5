//! SM3 permutations, boolean functions, and the 64-round compression
//! function.

use super::constants::{T0, T1};

/// Permutation P0, used to mix `TT2` back into `E` each round.
///
/// `P0(x) = x ⊕ (x <<< 9) ⊕ (x <<< 17)`
#[inline(always)]
pub fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

/// Permutation P1, used during message expansion.
///
/// `P1(x) = x ⊕ (x <<< 15) ⊕ (x <<< 23)`
#[inline(always)]
pub fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// Boolean function FF for rounds 0-15: plain XOR.
#[inline(always)]
fn ff0(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// Boolean function FF for rounds 16-63: bitwise majority.
#[inline(always)]
fn ff1(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

/// Boolean function GG for rounds 0-15: plain XOR.
#[inline(always)]
fn gg0(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// Boolean function GG for rounds 16-63: bitwise choice.
#[inline(always)]
fn gg1(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// Expands a 16-word block into the 68-word message schedule `W` plus
/// the 64-word derived schedule `W'` (`w1[j] = w[j] ^ w[j+4]`).
///
/// `W[j] = P1(W[j-16] ^ W[j-9] ^ (W[j-3] <<< 15)) ^ (W[j-13] <<< 7) ^ W[j-6]`
pub fn expand_message(block: &[u8; 64]) -> ([u32; 68], [u32; 64]) {
    let mut w = [0u32; 68];
    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)).take(16) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    for j in 16..68 {
        let temp = w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15);
        w[j] = p1(temp) ^ w[j - 13].rotate_left(7) ^ w[j - 6];
    }

    let mut w1 = [0u32; 64];
    for j in 0..64 {
        w1[j] = w[j] ^ w[j + 4];
    }

    (w, w1)
}

/// Runs the 64-round compression function over one 64-byte block,
/// folding the result back into `digest` with XOR — SM3's distinguishing
/// feedback step, unlike the wrapping-add feedback used by the SHA
/// family.
pub fn compress(digest: &mut [u32; 8], block: &[u8; 64]) {
    let (w, w1) = expand_message(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *digest;

    for j in 0..64 {
        let t = if j < 16 { T0 } else { T1 };
        let ss1 = a
            .rotate_left(12)
            .wrapping_add(e)
            .wrapping_add(t.rotate_left(j as u32))
            .rotate_left(7);
        let ss2 = ss1 ^ a.rotate_left(12);

        let (ff, gg) = if j < 16 {
            (ff0(a, b, c), gg0(e, f, g))
        } else {
            (ff1(a, b, c), gg1(e, f, g))
        };

        let tt1 = ff.wrapping_add(d).wrapping_add(ss2).wrapping_add(w1[j]);
        let tt2 = gg.wrapping_add(h).wrapping_add(ss1).wrapping_add(w[j]);

        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p0(tt2);
    }

    digest[0] ^= a;
    digest[1] ^= b;
    digest[2] ^= c;
    digest[3] ^= d;
    digest[4] ^= e;
    digest[5] ^= f;
    digest[6] ^= g;
    digest[7] ^= h;
}
