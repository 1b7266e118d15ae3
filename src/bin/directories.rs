//! Creating, listing, and walking directories.
//!
//! Run with: cargo run --bin directories

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn create_empty_file(path: &Path) -> std::io::Result<()> {
    fs::write(path, b"")
}

fn main() -> std::io::Result<()> {
    // Work inside a scratch directory so nothing leaks into the tree.
    let scratch = tempfile::tempdir()?;
    let base = scratch.path();

    // Create a single directory.
    let subdir = base.join("subdir");
    fs::create_dir(&subdir)?;

    create_empty_file(&subdir.join("file1"))?;

    // create_dir_all makes a whole hierarchy, like mkdir -p, and is happy
    // if parts already exist.
    let parent_child = subdir.join("parent").join("child");
    fs::create_dir_all(&parent_child)?;

    create_empty_file(&subdir.join("parent").join("file2"))?;
    create_empty_file(&subdir.join("parent").join("file3"))?;
    create_empty_file(&parent_child.join("file4"))?;

    // read_dir lists one directory level; entries know whether they are
    // files or directories.
    println!("Listing {}", subdir.join("parent").display());
    let mut entries: Vec<_> = fs::read_dir(subdir.join("parent"))?
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        let kind = if entry.file_type()?.is_dir() { "dir " } else { "file" };
        println!("  {} {}", kind, entry.file_name().to_string_lossy());
    }

    // Changing directory is process-global; prefer carrying the base path.
    // For recursive traversal, walkdir visits the whole tree in order.
    println!("Visiting {}", subdir.display());
    for entry in WalkDir::new(&subdir).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::other)?;
        let rel = entry.path().strip_prefix(base).expect("under base");
        let kind = if entry.file_type().is_dir() { "dir " } else { "file" };
        println!("  {} {}", kind, rel.display());
    }

    // remove_dir_all deletes a tree, like rm -rf. The tempdir would do
    // this on drop anyway.
    fs::remove_dir_all(&subdir)?;
    println!("removed {}", subdir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_visits_nested_files() -> std::io::Result<()> {
        let scratch = tempfile::tempdir()?;
        let deep = scratch.path().join("a/b/c");
        fs::create_dir_all(&deep)?;
        create_empty_file(&deep.join("leaf"))?;

        let names: Vec<String> = WalkDir::new(scratch.path())
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["leaf"]);
        Ok(())
    }
}
