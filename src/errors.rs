use thiserror::Error;

/// Error depicting errors that occur while loading the configuration
///
#[derive(Error, Debug)]
#[error("ConfigError: {0}")]
pub struct ConfigError(pub String);
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}

/// Error depicting errors that occur while setting up logging
///
#[derive(Error, Debug)]
#[error("LoggingError: {0}")]
pub struct LoggingError(pub String);
impl From<std::io::Error> for LoggingError {
    fn from(e: std::io::Error) -> Self { LoggingError(e.to_string()) }
}
impl From<log4rs::config::runtime::ConfigErrors> for LoggingError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self { LoggingError(e.to_string()) }
}
impl From<log::SetLoggerError> for LoggingError {
    fn from(e: log::SetLoggerError) -> Self { LoggingError(e.to_string()) }
}

/// Errors that occur while reading or writing location documents
///
#[derive(Error, Debug)]
pub enum InputError {
    #[error("InputError::File: {0}")]
    File(String),
    #[error("InputError::Document: {0}")]
    Document(String),
    #[error("InputError::Pattern: {0}")]
    Pattern(String),
}
impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self { InputError::File(e.to_string()) }
}
impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self { InputError::Document(e.to_string()) }
}
impl From<glob::PatternError> for InputError {
    fn from(e: glob::PatternError) -> Self { InputError::Pattern(e.to_string()) }
}

/// Error depicting errors that occur during startup
///
#[derive(Error, Debug)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
}
