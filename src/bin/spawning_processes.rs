//! Spawning external processes: capturing output, piping stdin and stdout.
//!
//! Run with: cargo run --bin spawning_processes

use std::io::Write;
use std::process::{Command, Stdio};

fn main() -> std::io::Result<()> {
    // The simplest case: run a command with no input and collect its
    // output. `output()` waits for the process and buffers stdout/stderr.
    let date = Command::new("date").output()?;
    println!("> date");
    print!("{}", String::from_utf8_lossy(&date.stdout));

    // A bad flag surfaces as a failing exit status; a missing binary
    // would be an Err from output() itself.
    match Command::new("date").arg("-x").output() {
        Ok(out) if !out.status.success() => {
            println!("command exited with {}", out.status);
        }
        Ok(_) => println!("unexpectedly succeeded"),
        Err(e) => println!("failed to run: {}", e),
    }

    // Piping: spawn `grep hello`, write to its stdin, then read what it
    // filtered through.
    let mut grep = Command::new("grep")
        .arg("hello")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    {
        // Scope the handle so stdin closes when we're done writing;
        // otherwise grep waits for more input forever.
        let stdin = grep.stdin.as_mut().expect("stdin was piped");
        stdin.write_all(b"hello grep\ngoodbye grep\nhello again\n")?;
    }
    drop(grep.stdin.take());

    let out = grep.wait_with_output()?;
    println!("> grep hello");
    print!("{}", String::from_utf8_lossy(&out.stdout));

    // Arguments are passed as a list; there is no shell in between unless
    // you spawn one explicitly.
    let ls = Command::new("ls").args(["-a", "-l", "-h"]).output()?;
    println!("> ls -a -l -h");
    print!("{}", String::from_utf8_lossy(&ls.stdout));

    Ok(())
}
