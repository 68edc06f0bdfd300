//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes, una a la vez
//! 3. Lee y parsea un request por conexión
//! 4. Envía la respuesta y cierra la conexión

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
