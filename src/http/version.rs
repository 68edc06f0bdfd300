//! # Versión del protocolo
//! src/http/version.rs

use std::fmt;

/// Versión HTTP de un request o response
///
/// Solo reconocemos HTTP/1.1. Cualquier otro token queda como `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Version {
    /// HTTP/1.1
    #[default]
    Http11,

    /// Versión no reconocida
    Unknown,
}

impl Version {
    /// Parsea la versión desde el token de la request line
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http_server::http::Version;
    ///
    /// assert_eq!(Version::parse("HTTP/1.1"), Version::Http11);
    /// assert_eq!(Version::parse("HTTP/1.0"), Version::Unknown);
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "HTTP/1.1" => Version::Http11,
            _ => Version::Unknown,
        }
    }

    /// Texto exacto que se escribe en el status line
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::Http11 => "HTTP/1.1",
            Version::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
