//! Base64 encoding, standard and URL-safe alphabets.
//!
//! Run with: cargo run --bin base64_encoding

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;

fn main() {
    // The data to encode. Encoders take bytes, so any &str works via
    // as_bytes.
    let data = "abc123!?$*&()'-=@~";

    // Standard base64.
    let std_enc = STANDARD.encode(data);
    println!("{}", std_enc);

    // Decoding returns a Result: the input may not be valid base64.
    let std_dec = STANDARD.decode(&std_enc).expect("valid base64");
    println!("{}", String::from_utf8(std_dec).expect("round trip is utf8"));
    println!();

    // The URL-safe alphabet swaps + and / for - and _, producing output
    // that can live in URLs and file names. Note the trailing characters
    // differ between the two encodings.
    let url_enc = URL_SAFE.encode(data);
    println!("{}", url_enc);
    let url_dec = URL_SAFE.decode(&url_enc).expect("valid base64");
    println!("{}", String::from_utf8(url_dec).expect("round trip is utf8"));

    // Invalid input demonstrates the error path.
    println!("{:?}", STANDARD.decode("not!!valid"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_encode() {
        assert_eq!(STANDARD.encode("abc123!?$*&()'-=@~"), "YWJjMTIzIT8kKiYoKSctPUB+");
    }

    #[test]
    fn test_url_safe_differs() {
        let data = "abc123!?$*&()'-=@~";
        assert_eq!(URL_SAFE.encode(data), "YWJjMTIzIT8kKiYoKSctPUB-");
        assert_ne!(URL_SAFE.encode(data), STANDARD.encode(data));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(STANDARD.decode("not!!valid").is_err());
    }
}
