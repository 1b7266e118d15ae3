//! One-shot timers: firing once in the future, and cancelling.
//!
//! Run with: cargo run --bin timers

use crossbeam::channel;
use crossbeam::select;
use std::thread;
use std::time::Duration;

fn main() {
    // `after` hands back a channel that receives exactly one message when
    // the duration has elapsed.
    let timer1 = channel::after(Duration::from_secs(2));

    // Blocking on the receive waits for the timer to fire. If all we
    // wanted was the wait, thread::sleep would do; a timer's value is that
    // it can be raced against other events.
    timer1.recv().expect("timer channel closed");
    println!("timer1 fired");

    // Cancellation: race the timer against a cancel channel. Sending on
    // cancel before the deadline stops the timer from having any effect.
    let timer2 = channel::after(Duration::from_secs(1));
    let (cancel_tx, cancel_rx) = channel::bounded(1);

    let waiter = thread::spawn(move || {
        select! {
            recv(timer2) -> _ => println!("timer2 fired"),
            recv(cancel_rx) -> _ => println!("timer2 stopped"),
        }
    });

    cancel_tx.send(()).expect("waiter gone");
    waiter.join().expect("waiter panicked");

    // Give timer2 enough time to have fired, to show that it was in fact
    // stopped.
    thread::sleep(Duration::from_secs(2));
}
