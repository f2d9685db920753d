use ordjson::{decode, encode, DecoderOptions, EncoderOptions};

fn main() {
    println!("=== JSON decode/encode round-trip ===\n");

    let input = r#"{
        "name": "Ann",
        "tags": ["x", "y"],
        "age": 30,
        "score": 91.5,
        "ok": true,
        "note": null
    }"#;

    println!("Input JSON:");
    println!("{}\n", input);

    let value = decode(input, &DecoderOptions::default()).unwrap();
    println!("Decoded tree:");
    println!("{:#?}\n", value);

    let compact = encode(&value, &EncoderOptions::default());
    println!("Re-encoded (canonical, insertion order kept):");
    println!("{}\n", compact);

    let again = decode(&compact, &DecoderOptions::default()).unwrap();
    assert_eq!(value, again, "Round-trip failed!");
    println!("Round-trip successful!");

    // Non-ASCII text: escaped by default, raw on request
    let emoji = decode(r#"["café", "😀"]"#, &DecoderOptions::default()).unwrap();
    println!("\nEscaped output: {}", encode(&emoji, &EncoderOptions::default()));
    let raw = EncoderOptions {
        escape_unicode: false,
    };
    println!("Raw output:     {}", encode(&emoji, &raw));
}
