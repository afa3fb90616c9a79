//! CLI command handlers, one file per command.

mod db;
mod get;
mod param;
mod parse;

pub use db::run_db;
pub use get::run_get;
pub use param::run_param;
pub use parse::run_parse;
#[cfg(test)]
pub(crate) use parse::components;
