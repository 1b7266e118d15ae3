//! Bounding how long we wait for a result.
//!
//! Run with: cargo run --bin timeouts

use crossbeam::channel;
use crossbeam::select;
use std::thread;
use std::time::Duration;

fn main() {
    // Suppose an external call delivers its result on c1 after 2s. The
    // channel is buffered so the send completes even if nobody ever reads
    // it, which avoids leaking a blocked thread when we time out.
    let (tx1, rx1) = channel::bounded(1);
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(2));
        let _ = tx1.send("result 1");
    });

    // `after` returns a channel that delivers one message when the
    // duration elapses; selecting against it implements the timeout.
    select! {
        recv(rx1) -> res => println!("{}", res.expect("worker dropped sender")),
        recv(channel::after(Duration::from_secs(1))) -> _ => println!("timeout 1"),
    }

    // Allow a longer timeout and the receive succeeds.
    let (tx2, rx2) = channel::bounded(1);
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(2));
        let _ = tx2.send("result 2");
    });

    select! {
        recv(rx2) -> res => println!("{}", res.expect("worker dropped sender")),
        recv(channel::after(Duration::from_secs(3))) -> _ => println!("timeout 2"),
    }

    // For the common receive-or-timeout case, `recv_timeout` says the same
    // thing without the select.
    let (tx3, rx3) = channel::bounded::<&str>(1);
    drop(tx3);
    match rx3.recv_timeout(Duration::from_millis(100)) {
        Ok(v) => println!("{}", v),
        Err(e) => println!("recv_timeout: {}", e),
    }
}
