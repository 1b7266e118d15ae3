//! XML encoding and decoding with serde and quick-xml.
//!
//! Run with: cargo run --bin xml

use serde::{Deserialize, Serialize};

// The serde derives cover XML too; quick-xml maps fields to child elements
// and "@name" renames to attributes. The rename on the struct sets the
// element name for the document root.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename = "plant")]
struct Plant {
    #[serde(rename = "@id")]
    id: i32,
    name: String,
    // A Vec becomes repeated <origin> elements.
    origin: Vec<String>,
}

impl std::fmt::Display for Plant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Plant id={}, name={}, origin={:?}", self.id, self.name, self.origin)
    }
}

// Elements nest by composition: a struct field holding another
// serializable struct emits it as a child element.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename = "nesting")]
struct Nesting {
    parent: Parent,
}

#[derive(Serialize, Deserialize, Debug)]
struct Parent {
    child: Vec<Plant>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let coffee = Plant {
        id: 27,
        name: "Coffee".to_string(),
        origin: vec!["Ethiopia".to_string(), "Brazil".to_string()],
    };

    // Plain one-line encoding.
    println!("{}", quick_xml::se::to_string(&coffee)?);

    // Indented output for readability, with an XML header on top.
    let mut out = String::new();
    let mut ser = quick_xml::se::Serializer::new(&mut out);
    ser.indent(' ', 2);
    coffee.serialize(ser)?;
    println!("{}", r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    println!("{}", out);

    // Decoding inverts the mapping; extra whitespace is tolerated.
    let parsed: Plant = quick_xml::de::from_str(&quick_xml::se::to_string(&coffee)?)?;
    println!("{}", parsed);

    // Malformed input is an Err, not a partial struct.
    let bad: Result<Plant, _> = quick_xml::de::from_str("not xml at all");
    println!("decode error: {}", bad.is_err());

    let tomato = Plant {
        id: 81,
        name: "Tomato".to_string(),
        origin: vec!["Mexico".to_string(), "California".to_string()],
    };

    let nesting = Nesting { parent: Parent { child: vec![coffee, tomato] } };
    let mut out = String::new();
    let mut ser = quick_xml::se::Serializer::new(&mut out);
    ser.indent(' ', 2);
    nesting.serialize(ser)?;
    println!("{}", out);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_attribute_and_elements() {
        let p = Plant { id: 1, name: "Basil".to_string(), origin: vec!["India".to_string()] };
        let xml = quick_xml::se::to_string(&p).unwrap();
        assert_eq!(xml, r#"<plant id="1"><name>Basil</name><origin>India</origin></plant>"#);
    }

    #[test]
    fn test_decode_round_trip() {
        let p = Plant {
            id: 27,
            name: "Coffee".to_string(),
            origin: vec!["Ethiopia".to_string(), "Brazil".to_string()],
        };
        let xml = quick_xml::se::to_string(&p).unwrap();
        let back: Plant = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let r: Result<Plant, _> = quick_xml::de::from_str("<plant>");
        assert!(r.is_err());
    }
}
