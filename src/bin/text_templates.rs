//! Rendering dynamic text: format! for static shapes, a tiny {{field}}
//! renderer for templates chosen at runtime.
//!
//! Run with: cargo run --bin text_templates

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;

lazy_static! {
    // Matches {{field}} actions, capturing the field name.
    static ref ACTION: Regex = Regex::new(r"\{\{(\w+)\}\}").expect("valid pattern");
}

// Substitute every {{field}} from the map; unknown fields render as
// <no value> so a typo is visible in the output rather than silent.
fn render(template: &str, values: &HashMap<&str, String>) -> String {
    ACTION
        .replace_all(template, |caps: &Captures| {
            values
                .get(&caps[1])
                .cloned()
                .unwrap_or_else(|| "<no value>".to_string())
        })
        .into_owned()
}

fn main() {
    // When the shape of the output is known at compile time, format! is
    // the template engine: checked arguments, named placeholders.
    println!("{}", format!("Value is {}", "some text"));
    println!("{}", format!("Value is {}", 5));
    println!("{}", format!("Value is {:?}", ["Rust", "Go", "C++", "C#"]));
    println!("{}", format!("Name: {name}", name = "George Russell"));

    // Templates that arrive at runtime (config files, user input) need a
    // renderer that parses actions out of the text.
    let t = "Hello {{name}}, you have {{count}} new messages";
    let values = HashMap::from([
        ("name", "Lewis Hamilton".to_string()),
        ("count", "3".to_string()),
    ]);
    println!("{}", render(t, &values));

    // Missing fields are flagged inline.
    println!("{}", render("Hi {{nobody}}", &values));

    // Conditional content is ordinary code around the render call, not a
    // template-language feature.
    let admin = false;
    let role = if admin { "an admin" } else { "a user" };
    println!("{}", render("{{name}} is {{role}}", &HashMap::from([
        ("name", "Max".to_string()),
        ("role", role.to_string()),
    ])));

    // So is looping.
    for lang in ["Rust", "Go", "Python"] {
        println!("- {}", render("{{item}}", &HashMap::from([("item", lang.to_string())])));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_fields() {
        let values = HashMap::from([("name", "Ann".to_string())]);
        assert_eq!(render("Hello {{name}}!", &values), "Hello Ann!");
    }

    #[test]
    fn test_render_flags_missing_fields() {
        let values = HashMap::new();
        assert_eq!(render("Hi {{name}}", &values), "Hi <no value>");
    }

    #[test]
    fn test_render_repeats_fields() {
        let values = HashMap::from([("x", "1".to_string())]);
        assert_eq!(render("{{x}}{{x}}", &values), "11");
    }
}
