use log::info;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::{load_config, Config, General};
use crate::errors::{InitError, LoggingError};

/// Log line layout shared by all appenders
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {t} - {m}{n}";

/// Name of the log file created in the configured log path
const LOG_FILE: &str = "sunset-forecast.log";

/// Loads configuration and sets up logging, returns the configuration
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn init(config_path: &str) -> Result<Config, InitError> {
    let config = load_config(config_path)?;
    setup_logging(&config.general)?;

    info!("sunset-forecast version: {}", env!("CARGO_PKG_VERSION"));

    Ok(config)
}

/// Configures log4rs with a file appender and, if requested, a console appender
///
/// # Arguments
///
/// * 'general' - general configuration holding log path, level and stdout flag
fn setup_logging(general: &General) -> Result<(), LoggingError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(format!("{}{}", general.log_path, LOG_FILE))?;

    let mut builder = log4rs::config::Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let log_config = builder.build(root.build(general.log_level))?;
    log4rs::init_config(log_config)?;

    Ok(())
}
