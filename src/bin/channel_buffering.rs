//! Buffered channels: sends that don't need a waiting receiver.
//!
//! Run with: cargo run --bin channel_buffering

use std::sync::mpsc;

fn main() {
    // `sync_channel(n)` creates a bounded channel with room for n values.
    // Sends complete immediately while there is buffer space, and block
    // once it is full, which is the built-in backpressure.
    let (tx, rx) = mpsc::sync_channel(2);

    // Because the channel buffers up to 2 values, both sends succeed with
    // no receiver listening yet.
    tx.send("buffered").expect("receiver dropped");
    tx.send("channel").expect("receiver dropped");

    // Later we can receive the two values as usual.
    println!("{}", rx.recv().expect("sender dropped"));
    println!("{}", rx.recv().expect("sender dropped"));

    // A third send here before any receive would have blocked; `try_send`
    // reports fullness instead of blocking.
    tx.send("room again").expect("receiver dropped");
    tx.send("still room").expect("receiver dropped");
    if let Err(mpsc::TrySendError::Full(v)) = tx.try_send("overflow") {
        println!("try_send refused: buffer full, value {:?} kept", v);
    }
    println!("{}", rx.recv().expect("sender dropped"));
    println!("{}", rx.recv().expect("sender dropped"));
}
