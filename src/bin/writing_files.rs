//! Writing files: one-shot writes, incremental writes, and buffering.
//!
//! Run with: cargo run --bin writing_files

use std::fs::{self, File};
use std::io::{BufWriter, Write};

fn main() -> std::io::Result<()> {
    let d1 = std::env::temp_dir().join("dat1");
    let d2 = std::env::temp_dir().join("dat2");

    // Dump a string (or bytes) straight into a file.
    fs::write(&d1, "hello\nrust\n")?;

    // For granular writes, create a File and write pieces.
    let mut f = File::create(&d2)?;

    f.write_all(b"some\n")?;
    f.write_all("writes\n".as_bytes())?;

    // `write!` formats directly into any Write destination.
    write!(f, "formatted {}\n", 42)?;

    // flush pushes OS-buffered data down; files also flush on drop, but an
    // explicit call surfaces the error instead of swallowing it.
    f.flush()?;

    // BufWriter batches many small writes into fewer syscalls.
    let f = File::create(std::env::temp_dir().join("dat3"))?;
    let mut w = BufWriter::new(f);
    w.write_all(b"buffered\n")?;
    w.flush()?;

    for p in ["dat1", "dat2", "dat3"] {
        let path = std::env::temp_dir().join(p);
        print!("{}:\n{}", p, fs::read_to_string(&path)?);
        fs::remove_file(&path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incremental_writes_concatenate() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out");
        let mut f = File::create(&path)?;
        f.write_all(b"some\n")?;
        write!(f, "formatted {}\n", 42)?;
        f.flush()?;
        assert_eq!(fs::read_to_string(&path)?, "some\nformatted 42\n");
        Ok(())
    }
}
