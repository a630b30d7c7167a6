use config::{Config, ConfigError, Environment, File};
use once_cell::sync::Lazy;
use rocket::serde::Deserialize;

/// the optional config file, relative to the working directory
pub static CONFIG_FILE: &str = "./Noteful.toml";

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct DbConfig {
    pub location: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct LogConfig {
    /// one of `off`, `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
    /// if set, logs are written to this file as well as stdout
    pub file: Option<String>,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct NotefulConfig {
    pub database: DbConfig,
    pub log: LogConfig,
}

/// Parses the config file located at ./Noteful.toml, if it exists, and then applies any
/// `NOTEFUL_` environment variables on top of it. Nested keys use `__`, so the database
/// location is `NOTEFUL_DATABASE__LOCATION`
pub fn parse_config() -> Result<NotefulConfig, ConfigError> {
    Config::builder()
        .set_default("database.location", "./noteful.sqlite")?
        .set_default("log.level", "info")?
        .add_source(File::with_name(CONFIG_FILE).required(false))
        .add_source(
            Environment::with_prefix("NOTEFUL")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

/// global variable for config, that way it doesn't need to be repeatedly parsed.
/// If the config can't be parsed, the application will panic
pub static NOTEFUL_CONFIG: Lazy<NotefulConfig> = Lazy::new(|| match parse_config() {
    Ok(config) => config,
    Err(e) => {
        eprintln!("Failed to parse config file. Exception is {e}");
        panic!("Failed to parse config file. Exception is {e}");
    }
});
