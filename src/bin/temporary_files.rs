//! Temporary files and directories that clean up after themselves.
//!
//! Run with: cargo run --bin temporary_files

use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn main() -> std::io::Result<()> {
    // NamedTempFile creates a uniquely named file in the system temp
    // location; there is no need to invent a name or worry about
    // collisions with concurrent runs.
    let mut f = NamedTempFile::new()?;
    println!("temp file name: {}", f.path().display());

    // The file deletes itself when the handle drops; nothing to remember.
    f.write_all(&[1, 2, 3, 4])?;

    // tempdir makes a scratch directory for several temporary files.
    let dir = tempdir()?;
    println!("temp dir name: {}", dir.path().display());

    let file1 = dir.path().join("file1");
    fs::write(&file1, [1, 2])?;
    println!("wrote {}", file1.display());

    // The directory (and contents) also vanish on drop. `close` does it
    // eagerly and reports any error.
    dir.close()?;
    println!("temp dir removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_temp_file_removed_on_drop() -> std::io::Result<()> {
        let path = {
            let f = NamedTempFile::new()?;
            f.path().to_path_buf()
        };
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_tempdir_holds_files_until_close() -> std::io::Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("f");
        fs::write(&file, b"x")?;
        assert!(file.exists());
        let path = dir.path().to_path_buf();
        dir.close()?;
        assert!(!path.exists());
        Ok(())
    }
}
