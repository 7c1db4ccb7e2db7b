//! # Logging
//! src/logger.rs
//!
//! Inicializa el logger global (`log` + `simplelog`): a archivo en modo
//! append por defecto, o a stderr con `--log-target console`.

use crate::config::{Config, LogTarget};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::fmt;
use std::fs::OpenOptions;
use std::io;

/// Error al inicializar el logger
#[derive(Debug)]
pub enum LoggerError {
    /// No se pudo abrir el archivo de log
    Io(io::Error),
    /// Ya había un logger instalado
    AlreadySet(log::SetLoggerError),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "cannot open log file: {}", e),
            LoggerError::AlreadySet(e) => write!(f, "logger already initialized: {}", e),
        }
    }
}

impl std::error::Error for LoggerError {}

fn logger_config() -> simplelog::Config {
    ConfigBuilder::new().set_time_format_rfc3339().build()
}

/// Instala el logger según la configuración
pub fn init(config: &Config) -> Result<(), LoggerError> {
    match config.log_target {
        LogTarget::Console => TermLogger::init(
            config.log_level,
            logger_config(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )
        .map_err(LoggerError::AlreadySet),
        LogTarget::File => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.log_file)
                .map_err(LoggerError::Io)?;
            WriteLogger::init(config.log_level, logger_config(), file).map_err(LoggerError::AlreadySet)
        }
    }
}
