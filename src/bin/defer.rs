//! Cleanup at scope exit: Drop is the deferred call.
//!
//! Run with: cargo run --bin defer

use std::fs::File;
use std::io::Write;

// A guard type runs its cleanup in Drop. Drop fires when the value goes out
// of scope, in reverse declaration order, even on early return or panic.
struct FileGuard {
    file: File,
    path: std::path::PathBuf,
}

impl FileGuard {
    fn create(path: std::path::PathBuf) -> std::io::Result<FileGuard> {
        println!("creating {:?}", path);
        let file = File::create(&path)?;
        Ok(FileGuard { file, path })
    }

    fn write(&mut self) -> std::io::Result<()> {
        println!("writing to {:?}", self.path);
        writeln!(self.file, "data")
    }
}

impl Drop for FileGuard {
    fn drop(&mut self) {
        // The file handle itself closes automatically; this Drop just makes
        // the moment visible.
        println!("closing {:?}", self.path);
    }
}

fn main() -> std::io::Result<()> {
    let path = std::env::temp_dir().join("defer.txt");

    // Create, write, and rely on scope exit for the close. There is no
    // defer statement because ownership already knows when cleanup runs.
    let mut f = FileGuard::create(path)?;
    f.write()?;

    // `drop(value)` forces cleanup earlier than scope exit when needed.
    drop(f);
    println!("guard dropped before end of main");

    Ok(())
}
