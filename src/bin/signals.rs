//! Handling Unix signals for graceful shutdown.
//!
//! Run with: cargo run --bin signals  (then press Ctrl+C)

use tokio::signal;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    // A server wants to shut down cleanly on SIGINT/SIGTERM rather than
    // being killed mid-request. tokio delivers signals as futures.
    let (done_tx, mut done_rx) = mpsc::channel::<&str>(1);

    // Wait for the signal on a separate task, then notify the rest of the
    // program, mirroring how a real server would fan the signal out.
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal as unix_signal, SignalKind};
            let mut sigterm =
                unix_signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
            tokio::select! {
                _ = signal::ctrl_c() => {
                    println!();
                    let _ = done_tx.send("interrupt").await;
                }
                _ = sigterm.recv() => {
                    println!();
                    let _ = done_tx.send("terminated").await;
                }
            }
        }
        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("failed to listen for ctrl_c");
            println!();
            let _ = done_tx.send("interrupt").await;
        }
    });

    // Block here until the expected signal arrives.
    println!("awaiting signal");
    let sig = done_rx.recv().await.expect("signal task gone");
    println!("{}", sig);
    println!("exiting");
}
