//! JSON encoding and decoding with serde.
//!
//! Run with: cargo run --bin json

use serde::{Deserialize, Serialize};
use serde_json::json;

// Deriving Serialize/Deserialize makes a type JSON-ready. Field names
// become the JSON keys by default.
#[derive(Serialize, Deserialize, Debug)]
struct Response1 {
    page: i32,
    fruits: Vec<String>,
}

// serde attributes customize key names, mirroring struct tags elsewhere.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Response2 {
    #[serde(rename = "page")]
    page_number: i32,
    fruits: Vec<String>,
}

fn main() -> serde_json::Result<()> {
    // Atomic values encode directly.
    println!("{}", serde_json::to_string(&true)?);
    println!("{}", serde_json::to_string(&1)?);
    println!("{}", serde_json::to_string(&2.34)?);
    println!("{}", serde_json::to_string("gopher")?);

    // Slices and maps become JSON arrays and objects.
    let slc = vec!["apple", "peach", "pear"];
    println!("{}", serde_json::to_string(&slc)?);

    let map = std::collections::HashMap::from([("apple", 5)]);
    println!("{}", serde_json::to_string(&map)?);

    // Custom types encode through their derives.
    let res1 = Response1 { page: 1, fruits: vec!["apple".into(), "peach".into(), "pear".into()] };
    println!("{}", serde_json::to_string(&res1)?);

    let res2 = Response2 {
        page_number: 1,
        fruits: vec!["apple".into(), "peach".into(), "pear".into()],
    };
    println!("{}", serde_json::to_string(&res2)?);

    // Decoding into a generic Value handles JSON of unknown shape.
    let byt = r#"{"num":6.13,"strs":["a","b"]}"#;
    let dat: serde_json::Value = serde_json::from_str(byt)?;
    println!("{}", dat);

    // Values are inspected with typed accessors instead of casts.
    let num = dat["num"].as_f64().expect("num is a number");
    println!("{}", num);

    let str1 = dat["strs"][0].as_str().expect("strs[0] is a string");
    println!("{}", str1);

    // Decoding into a concrete type adds type safety and drops the
    // accessor dance.
    let s = r#"{"page": 1, "fruits": ["apple", "peach"]}"#;
    let res: Response2 = serde_json::from_str(s)?;
    println!("{:?}", res);
    println!("{}", res.fruits[0]);

    // The json! macro builds Values inline.
    let inline = json!({"apple": 5, "lettuce": 7});
    println!("{}", inline);

    // Encoders also stream straight to writers such as stdout.
    serde_json::to_writer(std::io::stdout(), &inline)?;
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_custom_type() {
        let r = Response2 { page_number: 1, fruits: vec!["apple".into()] };
        let s = serde_json::to_string(&r).unwrap();
        assert_eq!(s, r#"{"page":1,"fruits":["apple"]}"#);
    }

    #[test]
    fn test_decode_custom_type() {
        let r: Response2 = serde_json::from_str(r#"{"page":2,"fruits":[]}"#).unwrap();
        assert_eq!(r, Response2 { page_number: 2, fruits: vec![] });
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let r: Result<Response2, _> = serde_json::from_str(r#"{"page":"one"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_value_accessors() {
        let v: serde_json::Value = serde_json::from_str(r#"{"n": 6.13}"#).unwrap();
        assert_eq!(v["n"].as_f64(), Some(6.13));
        assert_eq!(v["missing"].as_f64(), None);
    }
}
