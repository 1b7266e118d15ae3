//! Synchronizing threads with a done channel.
//!
//! Run with: cargo run --bin channel_synchronization

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

// The worker signals completion by sending on the channel it was given.
fn worker(done: mpsc::Sender<()>) {
    print!("working...");
    thread::sleep(Duration::from_secs(1));
    println!("done");

    // Send a unit value to say we're finished.
    done.send(()).expect("receiver dropped");
}

fn main() {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || worker(tx));

    // Block until the worker reports in. Without this receive, main could
    // exit before the worker even started. (Joining the handle is the more
    // direct tool when there is exactly one thread to wait for; a channel
    // scales to richer completion protocols.)
    rx.recv().expect("worker dropped its sender");
}
