//! # Módulo HTTP
//!
//! Implementa el subconjunto de HTTP/1.1 que usa el servidor, sin librerías
//! de alto nivel:
//!
//! - Métodos y versión con fallback `Unknown`
//! - Parsing de requests línea por línea
//! - Construcción y serialización de responses
//! - Códigos de estado que emite el servidor
//!
//! ### Formato de Request
//!
//! ```text
//! GET /hello HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! ```
//!
//! No hay framing de body: no se respeta `Content-Length` ni chunked.

pub mod method;    // GET, POST, Unknown
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP
pub mod version;   // HTTP/1.1, Unknown

// Re-exportamos los tipos principales para facilitar su uso
pub use method::Method;
pub use request::{ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
pub use version::Version;
