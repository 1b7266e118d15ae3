//! SHA-256 hashes with the sha2 crate.
//!
//! Run with: cargo run --bin sha256_hashing

use sha2::{Digest, Sha256};

// Hash a full message in one call.
fn sha256_hex(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    format!("{:x}", digest)
}

fn main() {
    let s = "sha256 this string";

    // One-shot hashing covers the common case.
    println!("{}", s);
    println!("{}", sha256_hex(s.as_bytes()));

    // The incremental interface feeds data in pieces, useful when the
    // input streams in. The final digest is identical.
    let mut hasher = Sha256::new();
    hasher.update(b"sha256 ");
    hasher.update(b"this string");
    let digest = hasher.finalize();
    println!("{:x}", digest);

    // Different input, completely different digest.
    println!("{}", sha256_hex(b"sha256 this string."));

    // SHA-256 is for integrity; password storage needs a dedicated slow
    // hash (bcrypt, scrypt, argon2).
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            sha256_hex(b"sha256 this string"),
            "1af1dfa857bf1d8814fe1af8983c18080019922e557f15a8a0d3db739d77aac9"
        );
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut hasher = Sha256::new();
        hasher.update(b"sha256 ");
        hasher.update(b"this string");
        assert_eq!(format!("{:x}", hasher.finalize()), sha256_hex(b"sha256 this string"));
    }
}
