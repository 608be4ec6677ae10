use crate::polynomial::errors::ComputorError;
use chrono::Local;
use simplelog::*;
use std::fs::File;

/// "debug", "info", "warn", "error" -> LevelFilter; "off" and "none" switch logging off
pub fn parse_loglevel(level: &str) -> Result<LevelFilter, ComputorError> {
    match level.to_lowercase().as_str() {
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" | "none" => Ok(LevelFilter::Off),
        other => Err(ComputorError::InvalidConfig(format!(
            "loglevel must be debug, info, warn, error or off, got '{}'",
            other
        ))),
    }
}

/// Initialize terminal logger and optionally a file logger "log_<date>_<time>.txt".
/// If a logger was already set the call does nothing.
pub fn init_logger(loglevel: Option<&str>, log_to_file: bool) -> Result<(), ComputorError> {
    let level = match loglevel {
        Some(level) => parse_loglevel(level)?,
        None => LevelFilter::Warn,
    };
    if level == LevelFilter::Off {
        return Ok(());
    }
    // a logger with a level other than Off is already installed
    if log::max_level() != LevelFilter::Off {
        log::debug!("logger is already initialized, settings '{:?}' ignored", loglevel);
        return Ok(());
    }

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));
    if log_to_file {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let name = format!("log_{}.txt", date_and_time);
        let file = File::create(&name)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    // Err means another logger was set in between
    let _ = CombinedLogger::init(loggers);
    Ok(())
}
