//! # Mini HTTP Server - Entry Point
//! src/main.rs
//!
//! Arranca el servidor (por defecto en 0.0.0.0:8080) y bloquea para siempre.

use mini_http_server::config::Config;
use mini_http_server::server::Server;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let config = Config::new();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("no se pudo inicializar el logging: {}", e);
    }

    info!(host = %config.host, port = config.port, "iniciando servidor");

    let server = match Server::bind(config) {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "error fatal al iniciar");
            std::process::exit(1);
        }
    };

    // Esto bloquea el thread hasta que el proceso se termine
    if let Err(e) = server.start() {
        error!(error = %e, "error fatal");
        std::process::exit(1);
    }
}
