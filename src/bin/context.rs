//! Cancellation: telling in-flight work to stop early.
//!
//! Run with: cargo run --bin context

use std::time::Duration;
use tokio::sync::watch;
use tokio::time;

// The worker does periodic work while keeping an eye on the shutdown
// channel. `select!` races the next unit of work against cancellation, so
// the task returns as soon as it is told to, not after its current sleep.
async fn worker(mut shutdown: watch::Receiver<bool>) {
    println!("worker: started");
    let mut ticks = time::interval(Duration::from_millis(300));
    loop {
        tokio::select! {
            _ = ticks.tick() => {
                println!("worker: doing work");
            }
            res = shutdown.changed() => {
                // changed() resolves when the sender signals or drops;
                // either way the work should stop.
                if res.is_err() || *shutdown.borrow() {
                    println!("worker: cancelled, cleaning up");
                    return;
                }
            }
        }
    }
}

#[tokio::main]
async fn main() {
    // A watch channel carries the cancellation signal. Every clone of the
    // receiver observes it, so one sender can stop any number of tasks.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let handle = tokio::spawn(worker(shutdown_rx));

    // Let the worker run for a second, then cancel it.
    time::sleep(Duration::from_secs(1)).await;
    println!("main: cancelling");
    shutdown_tx.send(true).expect("worker gone");

    handle.await.expect("worker panicked");
    println!("main: done");
}
