//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `geomark_core` linkage.
//! - Resolve a URL given as the first argument, with deterministic output
//!   for quick local sanity checks.

use geomark_core::resolve;

fn main() {
    match std::env::args().nth(1) {
        Some(url) => match resolve(&url) {
            Some(info) => println!("geomark_core resolved={info:?}"),
            None => println!("geomark_core resolved=none"),
        },
        None => println!("geomark_core version={}", geomark_core::core_version()),
    }
}
