//! Rate limiting with tickers and token buckets.
//!
//! Run with: cargo run --bin rate_limiting

use crossbeam::channel;
use std::thread;
use std::time::{Duration, Instant};

fn main() {
    // Basic rate limiting: serve queued requests no faster than one per
    // 200ms by blocking on a tick before each one.
    let (req_tx, req_rx) = channel::bounded(5);
    for i in 1..=5 {
        req_tx.send(i).expect("receiver dropped");
    }
    drop(req_tx);

    let limiter = channel::tick(Duration::from_millis(200));

    for req in req_rx {
        limiter.recv().expect("ticker closed");
        println!("request {} at {:?}", req, Instant::now());
    }

    println!();

    // Bursty limiting: a token bucket. The channel holds up to 3 tokens;
    // requests spend one each, and a refill thread adds a token every
    // 200ms. Up to 3 requests can go through back to back.
    let (bursty_tx, bursty_rx) = channel::bounded::<Instant>(3);
    for _ in 0..3 {
        bursty_tx.send(Instant::now()).expect("receiver dropped");
    }

    thread::spawn(move || {
        for t in channel::tick(Duration::from_millis(200)) {
            // When the bucket is full the send blocks, capping stored
            // burst capacity at 3.
            if bursty_tx.send(t).is_err() {
                return;
            }
        }
    });

    let (req_tx, req_rx) = channel::bounded(5);
    for i in 1..=5 {
        req_tx.send(i).expect("receiver dropped");
    }
    drop(req_tx);

    // The first three requests ride the burst; the final two wait for the
    // 200ms refills.
    for req in req_rx {
        bursty_rx.recv().expect("refiller gone");
        println!("request {} at {:?}", req, Instant::now());
    }
}
