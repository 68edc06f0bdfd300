//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración con soporte para argumentos CLI y variables de entorno.
//! Sin argumentos, el servidor escucha en todas las interfaces en el 8080.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./mini_http_server --port 3000 --log-level debug
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=3000 HTTP_HOST=127.0.0.1 ./mini_http_server
//! ```

use crate::error::{Error, Result};
use clap::Parser;
use tracing::Level;

/// Configuración del servidor HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "mini_http_server")]
#[command(about = "Servidor HTTP/1.1 mínimo de un solo hilo")]
#[command(version)]
pub struct Config {
    /// Puerto en el que escucha el servidor (0 = puerto efímero)
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Nivel máximo de logs (trace, debug, info, warn, error)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: Level,
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
    /// use mini_http_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }

        Ok(())
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            log_level: Level::INFO,
        }
    }
}
