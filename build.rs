//! Build script to generate the embedded word catalog
//!
//! Reads `data/words.txt` and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const TIERS: [&str; 3] = ["Easy", "Medium", "Hard"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(
        "data/words.txt",
        &Path::new(&out_dir).join("catalog.rs"),
        "WORD_BANK",
        "Built-in (word, hint, tier) catalog",
    );

    // Rebuild if the catalog changes
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_catalog(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(String, String, String)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(number, line)| parse_line(input_path, number + 1, line))
        .collect();

    assert!(!entries.is_empty(), "{input_path} contains no entries");
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word catalog").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str, Tier)] = &[").unwrap();

    for (word, hint, tier) in &entries {
        writeln!(output, "    ({word:?}, {hint:?}, Tier::{tier}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn parse_line(input_path: &str, number: usize, line: &str) -> (String, String, String) {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    let [word, hint, tier] = fields.as_slice() else {
        panic!("{input_path}:{number}: expected WORD|hint|tier, got {line:?}");
    };

    assert!(
        !word.is_empty() && word.chars().all(|c| c.is_ascii_uppercase()),
        "{input_path}:{number}: word {word:?} must be uppercase ASCII letters"
    );
    assert!(
        TIERS.contains(tier),
        "{input_path}:{number}: unknown tier {tier:?}"
    );

    ((*word).to_string(), (*hint).to_string(), (*tier).to_string())
}
