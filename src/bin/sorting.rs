//! Sorting built-in types and checking sortedness.
//!
//! Run with: cargo run --bin sorting

fn main() {
    // `sort` works on any slice whose elements implement `Ord`. It sorts in
    // place, so the Vec must be mutable.
    let mut strs = vec!["c", "a", "b"];
    strs.sort();
    println!("strings: {:?}", strs);

    // The same method sorts integers.
    let mut ints = vec![7, 2, 4];
    ints.sort();
    println!("ints:    {:?}", ints);

    // `is_sorted` checks whether a slice is already in order.
    let s = ints.is_sorted();
    println!("sorted:  {}", s);

    // Floats do not implement `Ord` (NaN breaks total ordering), so they
    // sort through `sort_by` with `total_cmp`.
    let mut floats: Vec<f64> = vec![3.2, 1.0, 2.7];
    floats.sort_by(|a, b| a.total_cmp(b));
    println!("floats:  {:?}", floats);
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_sort_ints() {
        let mut v = vec![3, 1, 2];
        v.sort();
        assert_eq!(v, vec![1, 2, 3]);
        assert!(v.is_sorted());
    }

    #[test]
    fn test_sort_floats_total_cmp() {
        let mut v: Vec<f64> = vec![2.5, -1.0, 0.0];
        v.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(v, vec![-1.0, 0.0, 2.5]);
    }
}
