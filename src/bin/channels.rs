//! Channels: sending values between threads.
//!
//! Run with: cargo run --bin channels

use std::sync::mpsc;
use std::thread;

fn main() {
    // `mpsc::channel` returns a sender and a receiver. Values flow from any
    // number of senders to the single receiver.
    let (tx, rx) = mpsc::channel();

    // Send a value from a spawned thread. The sender is moved into the
    // closure; send returns Err only if the receiver is gone.
    thread::spawn(move || {
        tx.send("ping").expect("receiver dropped");
    });

    // `recv` blocks until a value arrives. That blocking is what lets us
    // wait for the message without any extra synchronization.
    let msg = rx.recv().expect("sender dropped");
    println!("{}", msg);
}
