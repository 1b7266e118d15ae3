//! Atomic counters: lock-free shared state for simple numbers.
//!
//! Run with: cargo run --bin atomic_counters

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

fn main() {
    // An atomic integer can be updated from many threads without a lock.
    let ops = AtomicU64::new(0);

    // Scoped threads may borrow `ops` directly; the scope guarantees they
    // all finish before it is read afterwards.
    thread::scope(|s| {
        for _ in 0..50 {
            s.spawn(|| {
                for _ in 0..1000 {
                    // fetch_add performs the read-modify-write as one
                    // indivisible operation. A plain `ops += 1` through a
                    // shared reference would not compile, which is the
                    // borrow checker catching the data race.
                    ops.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });

    // All 50_000 increments arrive, none lost to races.
    println!("ops: {}", ops.load(Ordering::Relaxed));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concurrent_increments_all_counted() {
        let ops = AtomicU64::new(0);
        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..1000 {
                        ops.fetch_add(1, Ordering::Relaxed);
                    }
                });
            }
        });
        assert_eq!(ops.load(Ordering::Relaxed), 8000);
    }
}
