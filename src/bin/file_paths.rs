//! Building and dissecting file paths portably.
//!
//! Run with: cargo run --bin file_paths

use path_clean::PathClean;
use std::path::{Path, PathBuf};

fn main() {
    // `join` inserts the platform separator, so paths compose without
    // string concatenation.
    let p: PathBuf = Path::new("dir1").join("dir2").join("filename");
    println!("p: {}", p.display());

    // Joining normalizes nothing by itself; `clean` collapses ./ and ../
    // segments.
    println!("{}", Path::new("dir1//filename").clean().display());
    println!("{}", Path::new("dir1/../dir1").clean().display());

    // Split a path into its directory and file parts.
    println!("dir:  {}", p.parent().map(|d| d.display().to_string()).unwrap_or_default());
    println!("base: {}", p.file_name().and_then(|b| b.to_str()).unwrap_or(""));

    // Absolute or relative?
    println!("{}", Path::new("dir/file").is_absolute());
    println!("{}", Path::new("/dir/file").is_absolute());

    let filename = Path::new("config.json");

    // Extension and stem come apart without manual searching for dots.
    println!("ext:  {:?}", filename.extension());
    println!("stem: {:?}", filename.file_stem());

    // `strip_prefix` finds the path relative to a base, failing loudly if
    // the base does not actually prefix it.
    match Path::new("a/b/t/file").strip_prefix("a/b") {
        Ok(rel) => println!("rel: {}", rel.display()),
        Err(e) => println!("strip_prefix failed: {}", e),
    }
    match Path::new("a/b/t/file").strip_prefix("a/c") {
        Ok(rel) => println!("rel: {}", rel.display()),
        Err(e) => println!("strip_prefix failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_dots() {
        assert_eq!(Path::new("dir1/../dir1").clean(), PathBuf::from("dir1"));
        assert_eq!(Path::new("dir1//filename").clean(), PathBuf::from("dir1/filename"));
    }

    #[test]
    fn test_extension_and_stem() {
        let p = Path::new("config.json");
        assert_eq!(p.extension().and_then(|e| e.to_str()), Some("json"));
        assert_eq!(p.file_stem().and_then(|s| s.to_str()), Some("config"));
    }

    #[test]
    fn test_strip_prefix() {
        let rel = Path::new("a/b/t/file").strip_prefix("a/b").unwrap();
        assert_eq!(rel, Path::new("t/file"));
        assert!(Path::new("a/b/t/file").strip_prefix("a/c").is_err());
    }
}
