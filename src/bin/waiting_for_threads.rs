//! Waiting for a batch of threads: join handles and scoped threads.
//!
//! Run with: cargo run --bin waiting_for_threads

use std::thread;
use std::time::Duration;

fn worker(id: usize) {
    println!("worker {} starting", id);
    // Sleep to simulate an expensive task.
    thread::sleep(Duration::from_secs(1));
    println!("worker {} done", id);
}

fn main() {
    // The join handle is the wait-group: collect one per thread, then join
    // them all. No separate counter to increment and decrement.
    let handles: Vec<_> = (1..=5).map(|id| thread::spawn(move || worker(id))).collect();

    for h in handles {
        // join also surfaces a worker panic as an Err, unlike a bare
        // wait-group which has no error path.
        h.join().expect("worker panicked");
    }
    println!("all workers joined");

    // `thread::scope` bundles spawn-and-join structurally: every thread
    // spawned in the scope is joined when the scope ends, and the threads
    // may borrow local data.
    let ids = [6, 7, 8];
    thread::scope(|s| {
        for id in &ids {
            s.spawn(move || worker(*id));
        }
    });
    println!("scope complete");
}
