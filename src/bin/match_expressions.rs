//! Match expressions: patterns, multiple alternatives, guards, and binding.
//!
//! Run with: cargo run --bin match_expressions

use std::time::SystemTime;

fn main() {
    // A basic match on an integer. Arms are checked top to bottom and the
    // compiler insists the patterns cover every case.
    let i = 2;
    print!("Write {} as ", i);
    match i {
        1 => println!("one"),
        2 => println!("two"),
        3 => println!("three"),
        _ => println!("something else"),
    }

    // Several patterns can share one arm with `|`.
    let seconds = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let weekday = (seconds / 86_400 + 4) % 7; // 1970-01-01 was a Thursday
    match weekday {
        0 | 6 => println!("It's the weekend"),
        _ => println!("It's a weekday"),
    }

    // Guards let an arm add an arbitrary condition, which covers the
    // "switch without an expression" style.
    let hour = (seconds / 3_600) % 24;
    match hour {
        h if h < 12 => println!("It's before noon (hour {})", h),
        h => println!("It's after noon (hour {})", h),
    }

    // Matching on an enum replaces switching over a value's dynamic type:
    // the variants say exactly which shapes a value can take.
    #[derive(Debug)]
    enum Token {
        Flag(bool),
        Count(i64),
        Name(String),
    }

    let describe = |t: &Token| match t {
        Token::Flag(b) => println!("I'm a bool: {}", b),
        Token::Count(n) => println!("I'm an int: {}", n),
        Token::Name(s) => println!("I'm a string: {:?}", s),
    };

    describe(&Token::Flag(true));
    describe(&Token::Count(1));
    describe(&Token::Name("hey".to_string()));

    // Ranges are patterns too.
    let c = 'g';
    match c {
        'a' | 'e' | 'i' | 'o' | 'u' => println!("{} is a vowel", c),
        'a'..='z' => println!("{} is a consonant", c),
        _ => println!("{} is not a letter", c),
    }
}
