//! Spawning threads: concurrent execution of independent functions.
//!
//! Run with: cargo run --bin threads

use std::thread;
use std::time::Duration;

fn f(from: &str) {
    for i in 0..3 {
        println!("{}: {}", from, i);
    }
}

fn main() {
    // A direct call runs synchronously.
    f("direct");

    // `thread::spawn` runs the closure on a new OS thread. `move` hands the
    // closure ownership of anything it captures, since the thread may
    // outlive the current scope.
    let handle = thread::spawn(move || f("thread"));

    // A thread can run an anonymous closure directly.
    let anon = thread::spawn(|| {
        println!("going");
    });

    // `join` blocks until the thread finishes. Unlike fire-and-forget
    // goroutines, a JoinHandle makes waiting (and error propagation)
    // explicit. Dropping the handle instead detaches the thread.
    handle.join().expect("thread panicked");
    anon.join().expect("thread panicked");

    // Sleeping briefly is never needed for correctness here; the joins
    // above already ordered everything. This just marks the end.
    thread::sleep(Duration::from_millis(10));
    println!("done");
}
