//! Waiting on multiple channels at once with select.
//!
//! Run with: cargo run --bin select

use crossbeam::channel;
use crossbeam::select;
use std::thread;
use std::time::Duration;

fn main() {
    // We'll select across two channels. Each receives a value after some
    // delay, standing in for blocking RPC calls running concurrently.
    let (tx1, rx1) = channel::unbounded();
    let (tx2, rx2) = channel::unbounded();

    thread::spawn(move || {
        thread::sleep(Duration::from_secs(1));
        tx1.send("one").expect("receiver dropped");
    });

    thread::spawn(move || {
        thread::sleep(Duration::from_secs(2));
        tx2.send("two").expect("receiver dropped");
    });

    // `select!` blocks until one of its operations is ready and runs that
    // arm. Looping twice picks up both values as they arrive.
    for _ in 0..2 {
        select! {
            recv(rx1) -> msg => println!("received {}", msg.expect("rx1 closed")),
            recv(rx2) -> msg => println!("received {}", msg.expect("rx2 closed")),
        }
    }

    // Total runtime is about 2 seconds, not 3: both sleeps ran
    // concurrently and select picked each result up as it became ready.
}
