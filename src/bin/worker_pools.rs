//! Worker pools: fanning jobs out over a fixed set of threads.
//!
//! Run with: cargo run --bin worker_pools

use crossbeam::channel::{self, Receiver, Sender};
use rayon::prelude::*;
use std::thread;
use std::time::{Duration, Instant};

// Each worker receives on the shared jobs channel and sends results back.
// Cloning a crossbeam Receiver gives every worker a handle on the same
// queue, so jobs are distributed to whichever worker is free.
fn worker(id: usize, jobs: Receiver<u64>, results: Sender<u64>) {
    for j in jobs {
        println!("worker {} started  job {}", id, j);
        // Sleep to simulate an expensive task.
        thread::sleep(Duration::from_secs(1));
        println!("worker {} finished job {}", id, j);
        results.send(j * 2).expect("main dropped results");
    }
}

fn main() {
    const NUM_JOBS: u64 = 5;
    let (jobs_tx, jobs_rx) = channel::bounded(NUM_JOBS as usize);
    let (results_tx, results_rx) = channel::bounded(NUM_JOBS as usize);

    // Start three workers, all initially blocked waiting for jobs.
    let mut handles = Vec::new();
    for id in 1..=3 {
        let jobs = jobs_rx.clone();
        let results = results_tx.clone();
        handles.push(thread::spawn(move || worker(id, jobs, results)));
    }
    // Keep only the workers' clones of the results sender, so the results
    // channel closes when the last worker finishes.
    drop(results_tx);

    // Send the jobs, then close the channel to say that's all the work.
    let started = Instant::now();
    for j in 1..=NUM_JOBS {
        jobs_tx.send(j).expect("workers gone");
    }
    drop(jobs_tx);

    // Collect all results; this also waits for the workers to finish.
    let mut results: Vec<u64> = results_rx.iter().collect();
    results.sort();
    println!("results: {:?}", results);

    for h in handles {
        h.join().expect("worker panicked");
    }

    // Five seconds of simulated work completed in about two, because three
    // workers ran concurrently.
    println!("elapsed: {:?}", started.elapsed());

    // For CPU-bound batch work, rayon's pool (sized to the machine by
    // default) replaces the hand-built version with one line.
    println!("cpus: {}", num_cpus::get());
    let doubled: Vec<u64> = (1..=NUM_JOBS).into_par_iter().map(|j| j * 2).collect();
    println!("rayon results: {:?}", doubled);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_processes_every_job() {
        let (jobs_tx, jobs_rx) = channel::unbounded();
        let (results_tx, results_rx) = channel::unbounded();

        let mut handles = Vec::new();
        for _ in 0..4 {
            let jobs = jobs_rx.clone();
            let results = results_tx.clone();
            handles.push(thread::spawn(move || {
                for j in jobs {
                    results.send(j * 2).unwrap();
                }
            }));
        }
        drop(results_tx);

        for j in 1..=100u64 {
            jobs_tx.send(j).unwrap();
        }
        drop(jobs_tx);

        let mut results: Vec<u64> = results_rx.iter().collect();
        for h in handles {
            h.join().unwrap();
        }
        results.sort();
        let expected: Vec<u64> = (1..=100).map(|j| j * 2).collect();
        assert_eq!(results, expected);
    }
}
