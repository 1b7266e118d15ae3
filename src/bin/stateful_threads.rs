//! State owned by one thread, accessed by message passing.
//!
//! Run with: cargo run --bin stateful_threads

use crossbeam::channel::{self, Sender};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::Rng;

// Requests to the owning thread carry a reply channel, so the caller gets
// its answer back without ever touching the state directly.
struct ReadOp {
    key: u32,
    resp: Sender<u64>,
}

struct WriteOp {
    key: u32,
    val: u64,
    resp: Sender<bool>,
}

fn main() {
    // Operation counters, shared read-only with the reporting at the end.
    let read_ops = Arc::new(AtomicU64::new(0));
    let write_ops = Arc::new(AtomicU64::new(0));

    let (reads_tx, reads_rx) = channel::unbounded::<ReadOp>();
    let (writes_tx, writes_rx) = channel::unbounded::<WriteOp>();

    // This thread owns the map outright. Nothing else can reach it, so no
    // lock is needed: one owner, many correspondents.
    thread::spawn(move || {
        let mut state = std::collections::HashMap::<u32, u64>::new();
        loop {
            crossbeam::select! {
                recv(reads_rx) -> op => match op {
                    Ok(read) => {
                        let val = state.get(&read.key).copied().unwrap_or(0);
                        let _ = read.resp.send(val);
                    }
                    Err(_) => return,
                },
                recv(writes_rx) -> op => match op {
                    Ok(write) => {
                        state.insert(write.key, write.val);
                        let _ = write.resp.send(true);
                    }
                    Err(_) => return,
                },
            }
        }
    });

    // 100 reader threads issue read requests through the channel.
    let mut handles = Vec::new();
    for _ in 0..100 {
        let reads_tx = reads_tx.clone();
        let read_ops = Arc::clone(&read_ops);
        handles.push(thread::spawn(move || {
            let mut rng = rand::thread_rng();
            let deadline = std::time::Instant::now() + Duration::from_secs(1);
            while std::time::Instant::now() < deadline {
                let (resp_tx, resp_rx) = channel::bounded(1);
                let op = ReadOp { key: rng.gen_range(0..5), resp: resp_tx };
                reads_tx.send(op).expect("state owner gone");
                resp_rx.recv().expect("state owner gone");
                read_ops.fetch_add(1, Ordering::Relaxed);
                thread::sleep(Duration::from_millis(1));
            }
        }));
    }

    // 10 writer threads do the same for writes.
    for _ in 0..10 {
        let writes_tx = writes_tx.clone();
        let write_ops = Arc::clone(&write_ops);
        handles.push(thread::spawn(move || {
            let mut rng = rand::thread_rng();
            let deadline = std::time::Instant::now() + Duration::from_secs(1);
            while std::time::Instant::now() < deadline {
                let (resp_tx, resp_rx) = channel::bounded(1);
                let op = WriteOp {
                    key: rng.gen_range(0..5),
                    val: rng.gen_range(0..100),
                    resp: resp_tx,
                };
                writes_tx.send(op).expect("state owner gone");
                resp_rx.recv().expect("state owner gone");
                write_ops.fetch_add(1, Ordering::Relaxed);
                thread::sleep(Duration::from_millis(1));
            }
        }));
    }

    for h in handles {
        h.join().expect("requester panicked");
    }

    println!("read ops:  {}", read_ops.load(Ordering::Relaxed));
    println!("write ops: {}", write_ops.load(Ordering::Relaxed));

    // This channel-based design is more involved than a mutex around the
    // map; it pays off when the owner coordinates other resources or when
    // the mutexes to replace would be error-prone to hold correctly.
}
