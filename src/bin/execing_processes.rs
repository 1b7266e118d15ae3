//! Replacing the current process image with another program.
//!
//! Run with: cargo run --bin execing_processes

fn main() {
    // Sometimes we want to completely replace the current process with
    // another one, rather than spawn a child. On Unix that is exec.

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        use std::process::Command;

        // PATH lookup happens inside exec, and the current environment is
        // inherited by default. On success this call never returns: the
        // running program *becomes* `ls -a -l -h`.
        let err = Command::new("ls").args(["-a", "-l", "-h"]).exec();

        // Reaching this line means exec failed (e.g. binary not found).
        eprintln!("exec failed: {}", err);
        std::process::exit(1);
    }

    // There is no fork equivalent exposed; threads, spawned processes and
    // exec cover the use cases.
    #[cfg(not(unix))]
    println!("exec is a Unix facility; use Command::spawn here instead");
}
