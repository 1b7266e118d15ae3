//! Embedding file contents into the binary at compile time.
//!
//! Run with: cargo run --bin embedded_files

// include_str! reads a file at compile time and embeds it as a &'static
// str. The path is relative to this source file, and a missing file is a
// compile error, not a runtime one.
static FILE_STRING: &str = include_str!("../../data/quote.txt");

// include_bytes! does the same for raw bytes.
static FILE_BYTES: &[u8] = include_bytes!("../../data/quote.txt");

fn main() {
    // The embedded data needs no files on disk at run time; the binary is
    // self-contained.
    print!("{}", FILE_STRING);
    print!("{}", String::from_utf8_lossy(FILE_BYTES));

    println!("embedded {} bytes", FILE_BYTES.len());

    // Embedding whole folders needs a crate (e.g. include_dir); for a
    // handful of known files, one include per file keeps it simple.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_and_bytes_agree() {
        assert_eq!(FILE_STRING.as_bytes(), FILE_BYTES);
        assert!(FILE_STRING.contains("complexities"));
    }
}
