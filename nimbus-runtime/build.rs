//! Build script for nimbus-runtime
//!
//! Validates face.toml at compile time so a bad value fails the build
//! instead of silently falling back to defaults on the watch.

use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=face.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let path = Path::new("face.toml");
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => panic!("\n  ERROR: failed to read face.toml: {}\n", e),
    };

    let config: toml::Table = match toml::from_str(&content) {
        Ok(table) => table,
        Err(e) => panic!("\n  ERROR: invalid TOML syntax in face.toml\n\n{}\n", e),
    };

    check_range(&config, "fallback_wait_ms", 1, 60_000);
    check_range(&config, "refresh_interval_min", 1, 60);

    if let Some(format) = config.get("hour_format") {
        match format.as_str() {
            Some("12h") | Some("24h") => {}
            _ => panic!("\n  ERROR: hour_format must be \"12h\" or \"24h\"\n"),
        }
    }

    if let Some(signal) = config.get("time_signal").and_then(|v| v.as_table()) {
        let start = check_range(signal, "start_hour", 0, 23).unwrap_or(7);
        let end = check_range(signal, "end_hour", 0, 23).unwrap_or(22);
        if start > end {
            panic!(
                "\n  ERROR: time_signal.start_hour ({}) is after end_hour ({})\n",
                start, end
            );
        }
    }
}

/// Check an optional integer key lies in `min..=max`
fn check_range(table: &toml::Table, key: &str, min: i64, max: i64) -> Option<i64> {
    let value = table.get(key)?;
    let Some(n) = value.as_integer() else {
        panic!("\n  ERROR: {} must be an integer, got {}\n", key, value);
    };
    if n < min || n > max {
        panic!(
            "\n  ERROR: {} = {} is out of range ({}..={})\n",
            key, n, min, max
        );
    }
    Some(n)
}
