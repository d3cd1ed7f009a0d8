//! Simple CLI that reads HTML from stdin and prints the extraction result as JSON.
//!
//! Usage: `cargo run --features cli --bin extract_stdin -- [CHARSET] < page.html`
//!
//! Diagnostics go to stderr; set `RUST_LOG=rs_readability=debug` to see them.

use rs_readability::{extract_bytes, ExtractResult};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let charset = std::env::args().nth(1);

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let (output, status) = match extract_bytes(&html, charset.as_deref()) {
        Ok(result) => (result, 0),
        Err(err) => {
            tracing::error!(%err, "extraction failed");
            (ExtractResult::default(), 1)
        }
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
    std::process::exit(status);
}
