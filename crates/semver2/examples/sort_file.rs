//! Reads version strings from a file (one per line) and prints them in
//! ascending precedence, reporting lines that are not valid versions.

use std::fs;

use semver2::{parse, sort_by_precedence, Version};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "versions.txt".to_string());

    println!("Reading: {}", path);

    let text = fs::read_to_string(&path).expect("Failed to read file");

    let mut versions: Vec<Version> = Vec::new();
    let mut rejected = 0;
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse(line) {
            Ok(v) => versions.push(v),
            Err(e) => {
                rejected += 1;
                println!("  line {}: {:?} rejected: {}", line_no + 1, line, e);
            }
        }
    }

    sort_by_precedence(&mut versions);

    println!("\n=== Versions ({}, {} rejected) ===", versions.len(), rejected);
    for v in &versions {
        let kind = if v.is_pre_release() { "pre-release" } else { "release" };
        match v.build() {
            Some(build) => println!("  {:<32} {} (build {})", v, kind, build),
            None => println!("  {:<32} {}", v, kind),
        }
    }
}
