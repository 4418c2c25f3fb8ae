//! CLI tool for vlist - computes list windows from JSON options
//!
//! Usage:
//!   vlist_cli <options.json>                       # Window at offset 0 to stdout
//!   vlist_cli <options.json> --scroll 2475         # Window at a scroll offset
//!   vlist_cli <options.json> -o out.json           # Output JSON to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use vlist::layout::{placement, window};
use vlist::types::ListOptions;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: vlist_cli <options.json> [--scroll <offset>] [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let mut scroll_top: f32 = 0.0;
    let mut output_path: Option<&String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--scroll" if i + 1 < args.len() => {
                scroll_top = match args[i + 1].parse() {
                    Ok(v) => v,
                    Err(e) => {
                        eprintln!("Error parsing scroll offset {}: {}", args[i + 1], e);
                        std::process::exit(1);
                    }
                };
                i += 2;
            }
            "-o" if i + 1 < args.len() => {
                output_path = Some(&args[i + 1]);
                i += 2;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    // Read options file
    let text = match fs::read_to_string(input_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let options: ListOptions = match serde_json::from_str(&text) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error parsing options: {}", e);
            std::process::exit(1);
        }
    };

    // Compute the window
    let win = match window(&options, scroll_top) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error computing window: {}", e);
            std::process::exit(1);
        }
    };

    let placements: Vec<_> = win.indices().map(|i| placement(&options, i)).collect();

    let output = serde_json::json!({
        "scrollTop": scroll_top,
        "window": win,
        "placements": placements,
    });

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&output) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
