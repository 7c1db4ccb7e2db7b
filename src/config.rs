//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor con soporte para
//! argumentos CLI y variables de entorno. Se construye una sola vez al
//! arrancar y se pasa al `Server`; no hay estado global.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./webroot_server --port 8080 \
//!   --web-root ./webroot \
//!   --uploads-dir ./uploads \
//!   --log-target console
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 WEB_ROOT=/srv/www ./webroot_server
//! ```

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use serde::Serialize;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::time::Duration;

/// Destino de los logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    /// Archivo en modo append (`--log-file`)
    File,
    /// stderr
    Console,
}

/// Configuración del servidor
#[derive(Debug, Clone, Parser, Serialize)]
#[command(name = "webroot_server")]
#[command(about = "Servidor HTTP/1.1 secuencial: archivos estáticos, uploads y endpoints de cálculo")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor (0 = efímero)
    #[arg(short, long, default_value = "80", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Tamaño de la cola de conexiones pendientes del listener
    #[arg(long, default_value = "10", env = "HTTP_BACKLOG")]
    pub backlog: i32,

    /// Timeout de lectura/escritura por conexión, en segundos
    #[arg(long = "timeout", default_value = "2", env = "HTTP_TIMEOUT")]
    pub timeout_secs: u64,

    /// Tamaño del bloque de lectura de headers
    #[arg(long, default_value = "1024", env = "HTTP_BUFFER_SIZE")]
    pub buffer_size: usize,

    // === Directorios ===

    /// Directorio de archivos estáticos
    #[arg(long, default_value = "webroot", env = "WEB_ROOT")]
    pub web_root: PathBuf,

    /// Página que se sirve para `/`
    #[arg(long, default_value = "index.html", env = "DEFAULT_PAGE")]
    pub default_page: String,

    /// Directorio de /upload e /image
    #[arg(long, default_value = "uploads", env = "UPLOADS_DIR")]
    pub uploads_dir: PathBuf,

    /// Desactiva /upload e /image (pasan a buscarse como estáticos)
    #[arg(long, env = "DISABLE_UPLOADS")]
    pub disable_uploads: bool,

    /// Responder 404 a archivos inexistentes y 415 a extensiones
    /// desconocidas en vez de cerrar la conexión sin respuesta
    #[arg(long, env = "EXPLICIT_ERRORS")]
    pub explicit_errors: bool,

    // === Logging ===

    /// Destino de los logs
    #[arg(long, value_enum, default_value = "file", env = "LOG_TARGET")]
    pub log_target: LogTarget,

    /// Archivo de log (si el destino es `file`)
    #[arg(long, default_value = "server.log", env = "LOG_FILE")]
    pub log_file: PathBuf,

    /// Nivel mínimo de log (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "debug", env = "LOG_LEVEL")]
    pub log_level: LevelFilter,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use webroot_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:80");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resuelve la dirección de bind
    pub fn socket_addr(&self) -> io::Result<SocketAddr> {
        self.address().to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("no address for {}", self.address()),
            )
        })
    }

    /// Timeout por conexión
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Indica si /upload e /image están activos
    pub fn uploads_enabled(&self) -> bool {
        !self.disable_uploads
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.backlog <= 0 {
            return Err("Backlog must be >= 1".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("Timeout must be > 0".to_string());
        }
        if self.buffer_size == 0 {
            return Err("Buffer size must be >= 1".to_string());
        }
        if self.default_page.trim().is_empty() {
            return Err("Default page must not be empty".to_string());
        }

        Ok(())
    }

    /// Resumen JSON de la configuración para el log de arranque
    pub fn summary(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<config: {}>", e))
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 80,
            host: "127.0.0.1".to_string(),
            backlog: 10,
            timeout_secs: 2,
            buffer_size: 1024,
            web_root: PathBuf::from("webroot"),
            default_page: "index.html".to_string(),
            uploads_dir: PathBuf::from("uploads"),
            disable_uploads: false,
            explicit_errors: false,
            log_target: LogTarget::File,
            log_file: PathBuf::from("server.log"),
            log_level: LevelFilter::Debug,
        }
    }
}
