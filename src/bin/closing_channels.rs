//! Closing a channel by dropping the sender.
//!
//! Run with: cargo run --bin closing_channels

use std::sync::mpsc;
use std::thread;

fn main() {
    // A channel closes when every sender is dropped. Receivers then see the
    // end of the stream instead of blocking forever, which is how "no more
    // values are coming" is communicated.
    let (jobs_tx, jobs_rx) = mpsc::channel::<i32>();
    let (done_tx, done_rx) = mpsc::channel();

    // The worker repeatedly receives until the channel reports
    // disconnection.
    let worker = thread::spawn(move || loop {
        match jobs_rx.recv() {
            Ok(j) => println!("received job {}", j),
            Err(mpsc::RecvError) => {
                println!("received all jobs");
                done_tx.send(()).expect("main dropped receiver");
                return;
            }
        }
    });

    for j in 1..=3 {
        jobs_tx.send(j).expect("worker dropped receiver");
        println!("sent job {}", j);
    }

    // Dropping the last sender closes the channel.
    drop(jobs_tx);
    println!("sent all jobs");

    // Wait for the worker using the synchronization approach.
    done_rx.recv().expect("worker dropped sender");
    worker.join().expect("worker panicked");

    // Receiving from a closed, drained channel fails immediately.
    let (tx, rx) = mpsc::channel::<i32>();
    drop(tx);
    let more = rx.recv().is_ok();
    println!("received more jobs: {}", more);
}
