//! Extension traits for frequently used types.

mod json_value;
mod toml_table;

pub use json_value::JsonValueExt;
pub use toml_table::TomlTableExt;
