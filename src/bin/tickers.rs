//! Tickers: doing something repeatedly at a regular interval.
//!
//! Run with: cargo run --bin tickers

use crossbeam::channel;
use crossbeam::select;
use std::thread;
use std::time::Duration;

fn main() {
    // `tick` returns a channel that delivers the current time every 500ms.
    let ticker = channel::tick(Duration::from_millis(500));
    let (done_tx, done_rx) = channel::bounded(1);

    let worker = thread::spawn(move || loop {
        select! {
            recv(done_rx) -> _ => return,
            recv(ticker) -> at => {
                println!("tick at {:?}", at.expect("ticker closed"));
            }
        }
    });

    // Stop the ticker after 1600ms; it should have ticked three times.
    thread::sleep(Duration::from_millis(1600));
    done_tx.send(()).expect("worker gone");
    worker.join().expect("worker panicked");
    println!("ticker stopped");

    // Once the worker returns, its clone of the tick channel drops and no
    // further ticks are observed anywhere.
}
