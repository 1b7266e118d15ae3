//! Reading, setting, and listing environment variables.
//!
//! Run with: cargo run --bin environment_variables
//!       or: BAR=1 cargo run --bin environment_variables

use std::env;

fn main() {
    // Set a variable for this process (and children spawned after this
    // point).
    env::set_var("FOO", "1");

    // `var` returns a Result; a missing variable is an Err, not an empty
    // string, so absence and emptiness stay distinguishable.
    println!("FOO: {}", env::var("FOO").unwrap_or_default());
    println!("BAR: {}", env::var("BAR").unwrap_or_default());
    println!("BAR set: {}", env::var("BAR").is_ok());
    println!();

    // `vars` iterates every variable as a (key, value) pair. Print just
    // the keys to keep the output readable.
    let mut keys: Vec<String> = env::vars().map(|(k, _)| k).collect();
    keys.sort();
    for k in keys.iter().take(10) {
        println!("{}", k);
    }
    println!("... and {} more", keys.len().saturating_sub(10));
}
