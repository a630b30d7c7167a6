use std::time::SystemTime;

use log::LevelFilter;

use crate::config::LogConfig;

/// Installs the global logger. Every line looks like
/// `[2026-01-01T00:00:00Z INFO noteful_server::repository] message`.
///
/// Rocket's own logging is capped at `warn` so request chatter doesn't drown out the app
pub fn init_logging(config: &LogConfig) -> Result<(), fern::InitError> {
    let level = match config.level.parse::<LevelFilter>() {
        Ok(level) => level,
        Err(_) => {
            eprintln!("Unknown log level {}, using info", config.level);
            LevelFilter::Info
        }
    };
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("rocket", LevelFilter::Warn.min(level))
        .level_for("_", LevelFilter::Warn.min(level))
        .chain(std::io::stdout());
    if let Some(file) = &config.file {
        dispatch = dispatch.chain(fern::log_file(file)?);
    }
    dispatch.apply()?;
    Ok(())
}
