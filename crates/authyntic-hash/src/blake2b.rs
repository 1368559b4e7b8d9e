//! Portable BLAKE2b.
//!
//! The compression function is written against plain `u64` arithmetic so the
//! output does not depend on any platform hashing backend. Block scheduling
//! follows RFC 7693: the last block is only compressed on `finalize`, so a
//! message that ends exactly on a block boundary (or a keyed hash of an empty
//! message) gets its final flag on the right block.

use authyntic_core::{Error, Result};

/// Size of one message block in bytes.
pub const BLOCK_LEN: usize = 128;

/// Largest digest BLAKE2b can produce, in bytes.
pub const MAX_OUT_LEN: usize = 64;

/// Largest key accepted by keyed mode, in bytes.
pub const MAX_KEY_LEN: usize = 64;

/// Initialization vector (same as the SHA-512 IV).
pub const IV: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

/// Message word schedule per round. Rounds 10 and 11 reuse rows 0 and 1.
const SIGMA: [[usize; 16]; 12] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];

/// Right-rotation amounts used by the G function, in order.
const ROTATIONS: [u32; 4] = [32, 24, 16, 63];

/// The G mixing function over lanes `a`, `b`, `c`, `d` of `v`.
#[inline(always)]
fn mix(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(ROTATIONS[0]);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(ROTATIONS[1]);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(ROTATIONS[2]);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(ROTATIONS[3]);
}

/// BLAKE2b compression function `F`.
///
/// `counter` is the total number of message bytes processed so far,
/// including this block's. Returns the new chaining state.
pub fn compress(state: &[u64; 8], block: &[u8; BLOCK_LEN], counter: u128, last: bool) -> [u64; 8] {
    let mut m = [0u64; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *word = u64::from_le_bytes(bytes);
    }

    let mut v = [0u64; 16];
    v[..8].copy_from_slice(state);
    v[8..].copy_from_slice(&IV);
    v[12] ^= counter as u64;
    v[13] ^= (counter >> 64) as u64;
    if last {
        v[14] = !v[14];
    }

    for s in SIGMA.iter() {
        mix(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
        mix(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
        mix(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
        mix(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);
        mix(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
        mix(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
        mix(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
        mix(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
    }

    let mut out = *state;
    for (i, word) in out.iter_mut().enumerate() {
        *word ^= v[i] ^ v[i + 8];
    }
    out
}

/// Incremental BLAKE2b hasher, optionally keyed.
#[derive(Clone)]
pub struct Blake2b {
    state: [u64; 8],
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    counter: u128,
    out_len: usize,
}

impl Blake2b {
    /// Create an unkeyed hasher producing `out_len` bytes.
    pub fn new(out_len: usize) -> Result<Self> {
        Self::with_key(&[], out_len)
    }

    /// Create a keyed hasher producing `out_len` bytes.
    ///
    /// The zero-padded key occupies the first block, so it is counted as
    /// message bytes.
    pub fn with_key(key: &[u8], out_len: usize) -> Result<Self> {
        if out_len == 0 || out_len > MAX_OUT_LEN {
            return Err(Error::InvalidDigestLength(out_len));
        }
        if key.len() > MAX_KEY_LEN {
            return Err(Error::InvalidKeyLength(key.len()));
        }
        Ok(Self::init(key, out_len))
    }

    fn init(key: &[u8], out_len: usize) -> Self {
        let mut state = IV;
        state[0] ^= 0x0101_0000 ^ ((key.len() as u64) << 8) ^ out_len as u64;

        let mut hasher = Self {
            state,
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            counter: 0,
            out_len,
        };
        if !key.is_empty() {
            hasher.buffer[..key.len()].copy_from_slice(key);
            hasher.buffered = BLOCK_LEN;
        }
        hasher
    }

    /// Requested digest size in bytes.
    pub fn out_len(&self) -> usize {
        self.out_len
    }

    /// Absorb more message bytes.
    pub fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            // A full buffer is only compressed once more input shows it is
            // not the final block.
            if self.buffered == BLOCK_LEN {
                self.counter += BLOCK_LEN as u128;
                self.state = compress(&self.state, &self.buffer, self.counter, false);
                self.buffered = 0;
            }

            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
        }
    }

    /// Compress the final block and return the truncated digest.
    pub fn finalize(mut self) -> Vec<u8> {
        self.counter += self.buffered as u128;
        self.buffer[self.buffered..].fill(0);
        self.state = compress(&self.state, &self.buffer, self.counter, true);

        let mut out = Vec::with_capacity(MAX_OUT_LEN);
        for word in self.state {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out.truncate(self.out_len);
        out
    }
}

/// One-shot unkeyed BLAKE2b.
pub fn blake2b(data: &[u8], out_len: usize) -> Result<Vec<u8>> {
    let mut hasher = Blake2b::new(out_len)?;
    hasher.update(data);
    Ok(hasher.finalize())
}

/// One-shot keyed BLAKE2b.
pub fn blake2b_keyed(key: &[u8], data: &[u8], out_len: usize) -> Result<Vec<u8>> {
    let mut hasher = Blake2b::with_key(key, out_len)?;
    hasher.update(data);
    Ok(hasher.finalize())
}

/// BLAKE2b-512 of `data`.
pub fn blake2b_512(data: &[u8]) -> [u8; MAX_OUT_LEN] {
    let mut hasher = Blake2b::init(&[], MAX_OUT_LEN);
    hasher.update(data);

    let mut out = [0u8; MAX_OUT_LEN];
    out.copy_from_slice(&hasher.finalize());
    out
}
