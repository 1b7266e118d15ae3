//! Strings are UTF-8 bytes; chars are Unicode scalar values.
//!
//! Run with: cargo run --bin strings_and_chars

fn main() {
    // A &str is a slice of UTF-8 bytes. This Thai word for "hello" uses
    // characters outside ASCII, so bytes and characters diverge.
    let s = "สวัสดี";

    // `len` counts bytes, not characters.
    println!("len: {}", s.len());

    // Indexing into the raw bytes shows the UTF-8 encoding, one byte at a
    // time.
    for b in s.bytes() {
        print!("{:x} ", b);
    }
    println!();

    // `chars().count()` counts Unicode scalar values (what other languages
    // call runes or code points).
    println!("char count: {}", s.chars().count());

    // `char_indices` yields each char with the byte offset where it begins.
    // Offsets jump by 3 here because each of these chars encodes to three
    // bytes.
    for (idx, c) in s.char_indices() {
        println!("{} starts at byte {}", c, idx);
    }

    // A char literal is a Unicode scalar value, 4 bytes wide in memory.
    let c = 'ท';
    println!("{} is {} (U+{:04X})", c, c as u32, c as u32);
    examine(c);
    examine('ส');
}

fn examine(c: char) {
    // chars compare directly against literals.
    if c == 't' {
        println!("found tee");
    } else if c == 'ท' {
        println!("found thai tee");
    } else if c == 'ส' {
        println!("found thai so sua");
    }
}
