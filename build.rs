//! Exposes platform configuration to `option_env!` at compile time.
//!
//! Keys already present in the build environment win; otherwise values are
//! taken from a `.env` file at the crate root when one exists.

use std::collections::HashMap;
use std::path::Path;

const PLATFORM_KEYS: [&str; 6] = [
    "FIREBASE_API_KEY",
    "FIREBASE_AUTH_DOMAIN",
    "FIREBASE_PROJECT_ID",
    "FIREBASE_STORAGE_BUCKET",
    "FIREBASE_MESSAGING_SENDER_ID",
    "FIREBASE_APP_ID",
];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    for key in PLATFORM_KEYS {
        println!("cargo:rerun-if-env-changed={key}");
    }

    let mut from_file = HashMap::new();
    if let Ok(entries) = dotenvy::from_path_iter(Path::new(".env")) {
        for (key, value) in entries.flatten() {
            from_file.insert(key, value);
        }
    }

    for key in PLATFORM_KEYS {
        if std::env::var(key).is_ok() {
            continue;
        }
        if let Some(value) = from_file.get(key) {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
