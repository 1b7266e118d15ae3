//! Iterating over the values received on a channel.
//!
//! Run with: cargo run --bin channel_iteration

use std::sync::mpsc;

fn main() {
    let (tx, rx) = mpsc::channel();

    // Queue a couple of values in a buffered fashion, then drop the sender
    // to mark the end of the stream.
    tx.send("one").expect("receiver dropped");
    tx.send("two").expect("receiver dropped");
    drop(tx);

    // A Receiver is an iterator: the loop yields each value and ends
    // cleanly when the channel is closed and drained. It is still possible
    // to close the sending side early while keeping values already sent.
    for elem in rx {
        println!("{}", elem);
    }
}
