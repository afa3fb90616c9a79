//! `urlkit get` – print one component of a parsed URL.

use anyhow::Result;
use urlkit_core::{ParseOptions, ParsedUrl};

pub fn run_get(url: &str, attr: &str, opts: &ParseOptions) -> Result<()> {
    let parsed = ParsedUrl::with_options(url, opts)?;
    if let Some(value) = parsed.attr(attr)? {
        println!("{value}");
    }
    Ok(())
}
