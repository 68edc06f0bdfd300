//! # Métodos HTTP
//! src/http/method.rs
//!
//! El parsing de métodos es una función total: cualquier token que no
//! reconocemos se convierte en `Method::Unknown` en vez de fallar.

use std::fmt;

/// Métodos HTTP que entiende el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET - Obtener un recurso
    Get,

    /// POST - Enviar datos a un recurso
    Post,

    /// Cualquier otro token (PATCH, DELETE, basura...)
    Unknown,
}

impl Method {
    /// Parsea un método HTTP desde un string
    ///
    /// La comparación es exacta (sensible a mayúsculas).
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http_server::http::Method;
    ///
    /// assert_eq!(Method::parse("GET"), Method::Get);
    /// assert_eq!(Method::parse("PATCH"), Method::Unknown);
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            _ => Method::Unknown,
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
