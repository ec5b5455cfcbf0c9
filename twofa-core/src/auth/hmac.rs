//! HMAC-SHA1 (RFC 2104)
//!
//! Reference: https://www.ietf.org/rfc/rfc2104.txt
//! Block size: 64 bytes for SHA-1
//! Inner pad (ipad): 0x36
//! Outer pad (opad): 0x5C

use crate::auth::sha1::{self, Digest, Sha1, BLOCK_SIZE, DIGEST_SIZE};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// Compute HMAC-SHA1 following RFC 2104
///
/// 1. Hash the key if it is longer than the block size
/// 2. Zero-pad the key to the block size
/// 3. XOR the key with ipad and opad
/// 4. Hash `ipad ++ message`, then hash `opad ++ inner`
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> Digest {
    let mut key_block = [0u8; BLOCK_SIZE];

    if key.len() > BLOCK_SIZE {
        key_block[..DIGEST_SIZE].copy_from_slice(&sha1::digest(key));
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    let mut ipad_key = [0u8; BLOCK_SIZE];
    let mut opad_key = [0u8; BLOCK_SIZE];

    for i in 0..BLOCK_SIZE {
        ipad_key[i] = key_block[i] ^ IPAD;
        opad_key[i] = key_block[i] ^ OPAD;
    }

    let mut inner = Sha1::new();
    inner.update(ipad_key);
    inner.update(message);
    let inner_hash = inner.finalize();

    let mut outer = Sha1::new();
    outer.update(opad_key);
    outer.update(inner_hash);
    outer.finalize()
}
