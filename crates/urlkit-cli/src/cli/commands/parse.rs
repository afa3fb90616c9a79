//! `urlkit parse` – show every component of a parsed URL.

use anyhow::Result;
use serde_json::{Map, Value};
use urlkit_core::url_model::ATTRIBUTES;
use urlkit_core::{ParseOptions, ParsedUrl};

/// Component name and value pairs in display order; absent values are `None`.
pub(crate) fn components(parsed: &ParsedUrl) -> Result<Vec<(&'static str, Option<String>)>> {
    ATTRIBUTES
        .iter()
        .map(|name| -> Result<_> { Ok((*name, parsed.attr(name)?)) })
        .collect()
}

pub fn run_parse(url: &str, opts: &ParseOptions, json: bool) -> Result<()> {
    let parsed = ParsedUrl::with_options(url, opts)?;
    tracing::debug!(input = url, rendered = %parsed, "parsed url");
    let components = components(&parsed)?;

    if json {
        let mut obj = Map::new();
        for (name, value) in components {
            let value = match (name, value) {
                (_, None) => Value::Null,
                ("port", Some(port)) => port.parse::<u16>().map(Value::from).unwrap_or(Value::String(port)),
                (_, Some(v)) => Value::String(v),
            };
            obj.insert(name.to_string(), value);
        }
        println!("{}", serde_json::to_string_pretty(&Value::Object(obj))?);
    } else {
        for (name, value) in components {
            println!("{:<12} {}", name, value.as_deref().unwrap_or("-"));
        }
    }
    Ok(())
}
