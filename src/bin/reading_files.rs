//! Reading files: whole-file reads, seeking, and buffered line reads.
//!
//! Run with: cargo run --bin reading_files

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

fn main() -> std::io::Result<()> {
    // Write a small input file so the example is self-contained.
    let path = std::env::temp_dir().join("dat");
    fs::write(&path, "hello\nrust\n")?;

    // Slurping a file into a String is a one-liner.
    let dat = fs::read_to_string(&path)?;
    print!("{}", dat);

    // Opening a File gives finer control over which parts are read.
    let mut f = File::open(&path)?;

    // Read up to 5 bytes from the front.
    let mut b1 = [0u8; 5];
    let n1 = f.read(&mut b1)?;
    println!("{} bytes: {}", n1, String::from_utf8_lossy(&b1[..n1]));

    // Seek to a known position and read from there.
    let o2 = f.seek(SeekFrom::Start(6))?;
    let mut b2 = [0u8; 2];
    let n2 = f.read(&mut b2)?;
    println!("{} bytes @ {}: {}", n2, o2, String::from_utf8_lossy(&b2[..n2]));

    // Seek relative to the current position, or from the end.
    let _ = f.seek(SeekFrom::Current(2))?;
    let _ = f.seek(SeekFrom::End(-5))?;

    // read_exact errors unless it can fill the whole buffer, which is the
    // "read at least n bytes" guarantee.
    f.seek(SeekFrom::Start(6))?;
    let mut b3 = [0u8; 2];
    f.read_exact(&mut b3)?;
    println!("2 bytes @ 6: {}", String::from_utf8_lossy(&b3));

    // BufReader adds buffering and line-oriented helpers.
    let f = File::open(&path)?;
    let reader = BufReader::new(f);
    for line in reader.lines() {
        println!("line: {}", line?);
    }

    // Files close when their handle drops; no explicit close call.
    fs::remove_file(&path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_back_what_was_written() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("dat");
        let mut f = File::create(&path)?;
        f.write_all(b"hello\nrust\n")?;
        drop(f);

        assert_eq!(fs::read_to_string(&path)?, "hello\nrust\n");

        let reader = BufReader::new(File::open(&path)?);
        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
        assert_eq!(lines, vec!["hello", "rust"]);
        Ok(())
    }
}
