//! `urlkit db` – decode a packed database URL.

use anyhow::{bail, Result};
use serde_json::Value;
use urlkit_core::dj_url::{mask_secret, DjUrl};

pub fn run_db(packed: Option<String>, json: bool, show_password: bool) -> Result<()> {
    let Some(packed) = packed else {
        bail!("no connection string given and no database_url in config");
    };
    let db = DjUrl::parse(&packed);
    if db.is_empty() {
        tracing::info!("connection string decoded to no fields");
    }

    if json {
        let mut dict = db.to_dict();
        if !show_password {
            if let Some(Value::String(password)) = dict.get_mut("PASSWORD") {
                *password = mask_secret(password);
            }
        }
        println!("{}", serde_json::to_string_pretty(&Value::Object(dict))?);
    } else {
        println!("{db}");
    }
    Ok(())
}
