//! Reading raw command-line arguments.
//!
//! Run with: cargo run --bin command_line_arguments -- a b c

use std::env;

fn main() {
    // env::args yields the program name followed by the arguments.
    let args_with_prog: Vec<String> = env::args().collect();

    // Skipping the first element leaves just the arguments.
    let args_without_prog: Vec<String> = env::args().skip(1).collect();

    // Individual values are indexed like any Vec. `get` avoids a panic
    // when the position wasn't supplied.
    let arg = args_with_prog.get(3).cloned().unwrap_or_default();

    println!("{:?}", args_with_prog);
    println!("{:?}", args_without_prog);
    println!("{:?}", arg);
}
