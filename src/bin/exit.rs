//! Exiting immediately with a status code.
//!
//! Run with: cargo run --bin exit; echo $?

struct Goodbye;

impl Drop for Goodbye {
    fn drop(&mut self) {
        // This never prints: process::exit terminates without unwinding,
        // so destructors do not run.
        println!("!");
    }
}

fn main() {
    let _goodbye = Goodbye;

    // Exit with status 3. The exit status of `main` returning normally is
    // 0; any other status goes through process::exit (or by returning an
    // ExitCode from main).
    std::process::exit(3);
}
