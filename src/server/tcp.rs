//! # Servidor TCP
//! src/server/tcp.rs
//!
//! El socket se abre al construir el `Server` y se mantiene durante toda su
//! vida. `start` arma las rutas por defecto y se queda en el loop de
//! aceptación del router, una conexión a la vez.

use crate::config::Config;
use crate::error::Result;
use crate::http::{Request, Response, StatusCode};
use crate::router::Router;
use std::net::{SocketAddr, TcpListener};
use tracing::info;

/// Servidor HTTP/1.1 de un solo hilo
pub struct Server {
    config: Config,
    listener: TcpListener,
}

impl Server {
    /// Abre el socket en `config.address()`
    ///
    /// # Errores
    ///
    /// Retorna error si la configuración es inválida o el bind falla
    /// (puerto ocupado, permisos, host inválido).
    pub fn bind(config: Config) -> Result<Self> {
        config.validate()?;

        let listener = TcpListener::bind(config.address())?;
        info!(address = %config.address(), "socket abierto");

        Ok(Self { config, listener })
    }

    /// Dirección real del socket (útil con puerto 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Router con las dos rutas por defecto
    ///
    /// | Método | Path     | Respuesta                                        |
    /// |--------|----------|--------------------------------------------------|
    /// | GET    | `/`      | `200 OK` sin headers ni body                     |
    /// | GET    | `/hello` | `200 OK`, `text/html`, `<h1>Hello World!</h1>`   |
    pub fn router() -> Router {
        let mut router = Router::new();

        router.get("/", index_handler);
        router.get("/hello", hello_handler);

        router
    }

    /// Inicia el loop de aceptación; no retorna salvo error fatal
    pub fn start(&self) -> Result<()> {
        let router = Self::router();
        let address = self.local_addr()?;

        info!(
            configured = %self.config.address(),
            %address,
            "servidor escuchando (una conexión a la vez)"
        );

        router.handle(&self.listener)
    }
}

fn index_handler(_req: &Request) -> Response {
    Response::from_status(StatusCode::Ok)
}

fn hello_handler(_req: &Request) -> Response {
    Response::from_status(StatusCode::Ok)
        .with_header("Content-Type", "text/html")
        .with_body("<h1>Hello World!</h1>")
}
