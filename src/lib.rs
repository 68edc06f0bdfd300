//! # Mini HTTP Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo de un solo hilo: acepta una conexión, parsea
//! la request line y los headers, despacha por método + path exacto y
//! escribe la respuesta antes de cerrar.
//!
//! ## Arquitectura
//!
//! - `http`: Método, versión, parsing de requests y serialización de responses
//! - `router`: Tabla de rutas (gana la última registrada) y loop de aceptación
//! - `server`: Socket TCP y rutas por defecto
//! - `config`: Argumentos CLI y variables de entorno
//! - `error`: Errores del crate
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use mini_http_server::config::Config;
//! use mini_http_server::server::Server;
//!
//! let server = Server::bind(Config::default()).expect("Error al abrir socket");
//! server.start().expect("Error en el loop de aceptación");
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod router;
pub mod server;

pub use error::{Error, Result};
