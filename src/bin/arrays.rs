//! Fixed-size arrays: declaration, indexing, and multi-dimensional layouts.
//!
//! Run with: cargo run --bin arrays

fn main() {
    // An array's length is part of its type: `[i32; 5]` holds exactly five
    // i32s. Without an initializer list, spell out a repeated element.
    let a = [0i32; 5];
    println!("emp: {:?}", a);

    // Indexing reads and writes elements; out-of-bounds access panics
    // rather than reading garbage.
    let mut a = [0i32; 5];
    a[4] = 100;
    println!("set: {:?}", a);
    println!("get: {}", a[4]);

    // `len` returns the number of elements.
    println!("len: {}", a.len());

    // Declare and initialize in one line.
    let b = [1, 2, 3, 4, 5];
    println!("dcl: {:?}", b);

    // An index can be computed, and the rest filled with a default by
    // mutating after construction.
    let mut b = [0i32; 5];
    b[0] = 100;
    b[3] = 400;
    b[4] = 500;
    println!("idx: {:?}", b);

    // Arrays nest to build multi-dimensional data.
    let mut two_d = [[0i32; 3]; 2];
    for (i, row) in two_d.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (i + j) as i32;
        }
    }
    println!("2d: {:?}", two_d);
}
