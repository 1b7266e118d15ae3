//! Vec and slices: growable sequences and views into them.
//!
//! Run with: cargo run --bin slices

fn main() {
    // A `Vec` is the growable sequence type. An empty Vec has length zero.
    let mut s: Vec<String> = Vec::new();
    println!("uninit: {:?} {} {}", s, s.is_empty(), s.len());

    // `with_capacity` preallocates room without adding elements.
    s = Vec::with_capacity(3);
    println!("emp: {:?}, len: {}, cap: {}", s, s.len(), s.capacity());

    // Index assignment works for existing positions; `push` appends.
    s.push("a".to_string());
    s.push("b".to_string());
    s.push("c".to_string());
    println!("set: {:?}", s);
    println!("get: {}", s[2]);
    println!("len: {}", s.len());

    // Pushing past capacity reallocates transparently.
    s.push("d".to_string());
    s.push("e".to_string());
    s.push("f".to_string());
    println!("apd: {:?}", s);

    // `clone` copies the elements into an independent Vec.
    let c = s.clone();
    println!("cpy: {:?}", c);

    // A slice `&s[lo..hi]` is a borrowed view of elements lo..hi, without
    // copying. Either bound can be omitted.
    let l = &s[2..5];
    println!("sl1: {:?}", l);
    let l = &s[..5];
    println!("sl2: {:?}", l);
    let l = &s[2..];
    println!("sl3: {:?}", l);

    // The `vec!` macro declares and initializes in one step.
    let t = vec!["g", "h", "i"];
    println!("dcl: {:?}", t);

    // Slices of the same element type compare elementwise.
    let t2 = vec!["g", "h", "i"];
    if t == t2 {
        println!("t == t2");
    }

    // Vecs of Vecs form jagged two-dimensional data: inner lengths may vary.
    let mut two_d: Vec<Vec<i32>> = Vec::new();
    for i in 0..3 {
        let mut inner = Vec::new();
        for j in 0..=i {
            inner.push((i + j) as i32);
        }
        two_d.push(inner);
    }
    println!("2d: {:?}", two_d);
}
