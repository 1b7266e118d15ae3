//! Mutexes: safely sharing richer state across threads.
//!
//! Run with: cargo run --bin mutexes

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

// The mutex lives inside the struct with the data it guards, so the only
// way to reach the counters is through the lock.
struct Container {
    counters: Mutex<HashMap<String, u64>>,
}

impl Container {
    fn inc(&self, name: &str) {
        // `lock` returns a guard; the mutex unlocks when the guard drops
        // at the end of this function. Forgetting to unlock cannot happen.
        let mut counters = self.counters.lock().expect("mutex poisoned");
        *counters.entry(name.to_string()).or_insert(0) += 1;
    }

    fn snapshot(&self) -> HashMap<String, u64> {
        self.counters.lock().expect("mutex poisoned").clone()
    }
}

fn main() {
    // Arc shares one Container across threads by reference counting. The
    // mutex inside makes the shared mutation safe; the compiler rejects
    // unsynchronized access at the type level.
    let c = Arc::new(Container {
        counters: Mutex::new(HashMap::from([
            ("a".to_string(), 0),
            ("b".to_string(), 0),
        ])),
    });

    let do_increment = |c: Arc<Container>, name: &'static str, n: u64| {
        thread::spawn(move || {
            for _ in 0..n {
                c.inc(name);
            }
        })
    };

    // Three threads increment concurrently, two of them touching the same
    // key.
    let handles = vec![
        do_increment(Arc::clone(&c), "a", 10000),
        do_increment(Arc::clone(&c), "a", 10000),
        do_increment(Arc::clone(&c), "b", 10000),
    ];

    for h in handles {
        h.join().expect("incrementer panicked");
    }

    let mut final_counts: Vec<_> = c.snapshot().into_iter().collect();
    final_counts.sort();
    println!("counters: {:?}", final_counts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concurrent_increments() {
        let c = Arc::new(Container { counters: Mutex::new(HashMap::new()) });
        thread::scope(|s| {
            for _ in 0..4 {
                let c = Arc::clone(&c);
                s.spawn(move || {
                    for _ in 0..500 {
                        c.inc("k");
                    }
                });
            }
        });
        assert_eq!(c.snapshot().get("k"), Some(&2000));
    }
}
