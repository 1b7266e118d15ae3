//! Lists every example in src/bin with its summary line.
//!
//! Run with: cargo run --bin catalog

use colored::Colorize;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

// The first `//!` line of each example is its one-line summary.
fn summary_of(path: &Path) -> io::Result<String> {
    let contents = fs::read_to_string(path)?;
    for line in contents.lines() {
        if let Some(rest) = line.strip_prefix("//!") {
            let text = rest.trim();
            if !text.is_empty() {
                return Ok(text.to_string());
            }
        }
    }
    Ok(String::from("(no summary)"))
}

fn main() -> io::Result<()> {
    let bin_dir = Path::new("src").join("bin");
    if !bin_dir.is_dir() {
        eprintln!("run from the repository root: src/bin not found");
        std::process::exit(1);
    }

    let mut entries: Vec<_> = WalkDir::new(&bin_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "rs"))
        .collect();
    entries.sort_by_key(|e| e.file_name().to_os_string());

    let mut count = 0;
    for entry in entries {
        let name = entry
            .path()
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("?")
            .to_string();
        let summary = summary_of(entry.path())?;
        println!("{:<28} {}", name.green(), summary);
        count += 1;
    }

    println!("\n{} examples. Run one with: cargo run --bin <name>", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_summary_takes_first_doc_line() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("example.rs");
        let mut f = fs::File::create(&path)?;
        writeln!(f, "//! First line.")?;
        writeln!(f, "//! Second line.")?;
        writeln!(f, "fn main() {{}}")?;
        assert_eq!(summary_of(&path)?, "First line.");
        Ok(())
    }

    #[test]
    fn test_summary_missing_header() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("bare.rs");
        fs::write(&path, "fn main() {}\n")?;
        assert_eq!(summary_of(&path)?, "(no summary)");
        Ok(())
    }
}
