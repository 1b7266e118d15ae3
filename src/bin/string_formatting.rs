//! String formatting with format! and friends.
//!
//! Run with: cargo run --bin string_formatting

#[derive(Debug)]
struct Point {
    x: i32,
    y: i32,
}

fn main() {
    let p = Point { x: 1, y: 2 };

    // {:?} is the debug format, available for any type deriving Debug.
    println!("struct1: {:?}", p);

    // {:#?} pretty-prints with one field per line.
    println!("struct2: {:#?}", p);

    // {:p} prints a reference as an address.
    println!("pointer: {:p}", &p);

    // Integers, in various bases and as characters.
    println!("int: {}", 123);
    println!("bin: {:b}", 14);
    println!("char: {}", 33 as u8 as char);
    println!("hex: {:x}", 456);

    // Floats: default, fixed precision, and scientific notation.
    println!("float1: {}", 78.9);
    println!("float2: {:e}", 123400000.0);
    println!("float3: {:E}", 123400000.0);

    // Strings, quoted debug form, and hex dump of the bytes.
    println!("str1: {}", "\"string\"");
    println!("str2: {:?}", "\"string\"");
    println!("str3: {}", "hex this".bytes().map(|b| format!("{:x}", b)).collect::<String>());

    // Width and alignment. `>` right-aligns (the default for numbers),
    // `<` left-aligns; a `.` sets float precision.
    println!("width1: |{:6}|{:6}|", 12, 345);
    println!("width2: |{:6.2}|{:6.2}|", 1.2, 3.45);
    println!("width3: |{:<6.2}|{:<6.2}|", 1.2, 3.45);
    println!("width4: |{:6}|{:6}|", "foo", "b");
    println!("width5: |{:<6}|{:<6}|", "foo", "b");

    // `format!` renders to a String instead of printing.
    let s = format!("sprintf: a {}", "string");
    println!("{}", s);

    // `eprintln!` writes to stderr.
    eprintln!("io: an {}", "error");

    // Positional and named arguments can reorder or reuse inputs.
    println!("positional: {0} {1} {0}", "a", "b");
    println!("named: {name} is {age}", name = "ann", age = 37);
}
