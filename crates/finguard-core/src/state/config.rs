use crate::error::Error;
use std::path::Path;
use toml::value::Table;

/// Reads the config from a local file.
///
/// JSON files are supported besides TOML; any other extension is parsed as TOML.
pub(super) fn read_config_file(config_file: &Path, env: &str) -> Result<Table, Error> {
    let data = std::fs::read_to_string(config_file).map_err(|err| {
        let config_file = config_file.display();
        Error::with_source(format!("fail to read the config file `{config_file}`"), err)
    })?;
    let config_table = match config_file.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&data).map_err(Error::from),
        _ => data.parse::<Table>().map_err(Error::from),
    }
    .map_err(|err| {
        let config_file = config_file.display();
        err.wrap(format!("fail to parse the config file `{config_file}`"))
    })?;
    if let Some(file_name) = config_file.file_name().and_then(|s| s.to_str()) {
        tracing::info!(env, "`{file_name}` loaded");
    }
    Ok(config_table)
}
