//! `urlkit param` – single query-parameter get/set/del.

use anyhow::Result;
use urlkit_core::{ParseOptions, ParsedUrl};

use crate::cli::ParamAction;

pub fn run_param(action: ParamAction, opts: &ParseOptions) -> Result<()> {
    match action {
        ParamAction::Get { url, key } => {
            let parsed = ParsedUrl::with_options(&url, opts)?;
            match parsed.get_param(&key) {
                Some(value) => println!("{value}"),
                None => tracing::info!("parameter {} not present in {}", key, parsed),
            }
        }
        ParamAction::Set { url, key, value } => {
            let mut parsed = ParsedUrl::with_options(&url, opts)?;
            parsed.set_param(&key, &value);
            println!("{parsed}");
        }
        ParamAction::Del { url, key } => {
            let mut parsed = ParsedUrl::with_options(&url, opts)?;
            parsed.del_param(&key);
            println!("{parsed}");
        }
    }
    Ok(())
}
