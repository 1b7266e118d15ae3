//! Panicking on unrecoverable errors.
//!
//! Run with: cargo run --bin panic

fn main() {
    // A panic aborts the current thread when the program hits a state it
    // cannot continue from. Recoverable conditions belong in Result; panic
    // is for bugs and impossible states.

    // `unwrap` on an Err panics with the error as the message. Here the
    // parse genuinely cannot succeed.
    let n: Result<i32, _> = "not a number".parse();
    println!("parse result before unwrap: {:?}", n);

    // Panicking in a spawned thread lets the main thread observe the panic
    // as an Err from join, which keeps this example runnable end to end.
    let handle = std::thread::spawn(|| {
        panic!("a problem");
    });
    match handle.join() {
        Ok(_) => println!("thread finished normally"),
        Err(_) => println!("thread panicked, main carries on"),
    }

    // This one runs on the main thread, so the process exits nonzero and
    // prints a backtrace if RUST_BACKTRACE=1 is set. Nothing after it runs.
    panic!("a problem");
}
