//! # Webroot Server - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, inicializa el logging y arranca el servidor.
//! Solo un fallo al abrir el listener termina el proceso.

use log::{error, info};
use webroot_server::config::Config;
use webroot_server::logger;
use webroot_server::server::Server;

fn main() {
    let config = Config::new();

    if let Err(e) = logger::init(&config) {
        eprintln!("Error inicializando logging: {}", e);
        std::process::exit(1);
    }
    info!("Configuración: {}", config.summary());

    let server = match Server::bind(config) {
        Ok(server) => server,
        Err(e) => {
            error!("No se pudo abrir el listener: {}", e);
            eprintln!("Error fatal: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        error!("Error fatal: {}", e);
        eprintln!("Error fatal: {}", e);
        std::process::exit(1);
    }
}
