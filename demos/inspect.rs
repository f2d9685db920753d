use ordjson::{decode, DecoderOptions, Value};

fn main() {
    println!("=== Walking a decoded document ===\n");

    let input = r#"{"server":{"host":"example.com","port":8080},"features":["auth","cache"],"ratio":0.75}"#;
    let value = decode(input, &DecoderOptions::default()).unwrap();

    print_value(&value, 0);

    println!("\n=== Decode errors carry a kind and an offset ===\n");

    let broken = [
        r#"{"a":1,"a":2}"#,
        r#"[1, 2"#,
        r#"["\uZZZZ"]"#,
        r#"[01]"#,
        r#"{"a" 1}"#,
        "42",
    ];
    for input in broken {
        match decode(input, &DecoderOptions::default()) {
            Ok(value) => println!("{:30} -> {:?}", input, value),
            Err(err) => println!("{:30} -> {}", input, err),
        }
    }
}

fn print_value(value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Object(entries) => {
            println!("{}object with {} entries", pad, entries.len());
            for (key, item) in entries {
                println!("{}  {:?} ({}):", pad, key, item.type_name());
                print_value(item, depth + 2);
            }
        }
        Value::Array(items) => {
            println!("{}array with {} elements", pad, items.len());
            for item in items {
                print_value(item, depth + 1);
            }
        }
        scalar => println!("{}{:?}", pad, scalar),
    }
}
