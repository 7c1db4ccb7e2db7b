//! # Servidor TCP Secuencial
//! src/server/tcp.rs
//!
//! Una conexión a la vez: se acepta, se lee, se responde (o no) y se
//! cierra antes del siguiente `accept`. Las conexiones pendientes esperan
//! en el backlog del sistema operativo.

use crate::config::Config;
use crate::http::{read_head, Request};
use crate::router::Router;
use log::{debug, error, info};
use socket2::{Domain, Socket, Type};
use std::fs;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};

/// Servidor HTTP/1.1 de una conexión a la vez
pub struct Server {
    config: Config,
    router: Router,
    listener: TcpListener,
}

impl Server {
    /// Valida la configuración y abre el listener
    ///
    /// Crea el directorio de uploads si hace falta.
    pub fn bind(config: Config) -> io::Result<Self> {
        config
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        if config.uploads_enabled() {
            fs::create_dir_all(&config.uploads_dir)?;
        }

        let address = config.socket_addr()?;
        info!("[*] Iniciando servidor en {}", address);

        let listener = Self::listen(address, config.backlog)?;
        let router = Router::from_config(&config);

        Ok(Self {
            config,
            router,
            listener,
        })
    }

    fn listen(address: SocketAddr, backlog: i32) -> io::Result<TcpListener> {
        let socket = Socket::new(Domain::for_address(address), Type::STREAM, None)?;
        socket.set_reuse_address(true)?;
        socket.bind(&address.into())?;
        socket.listen(backlog)?;
        Ok(socket.into())
    }

    /// Dirección real del listener (útil con puerto 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Loop de accept; no retorna salvo que el listener deje de funcionar
    pub fn run(&self) -> io::Result<()> {
        info!(
            "[+] Servidor escuchando en {} (backlog {})",
            self.local_addr()?,
            self.config.backlog
        );

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(e) = self.handle_connection(stream) {
                        error!("Error en conexión: {}", e);
                    }
                }
                Err(e) => {
                    error!("Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Procesa una conexión completa y la cierra
    ///
    /// Solo retorna `Err` si fallan los timeouts del socket; los demás
    /// errores se registran y la conexión se cierra sin respuesta.
    pub fn handle_connection(&self, mut stream: TcpStream) -> io::Result<()> {
        let peer_addr = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        debug!("Nueva conexión desde {}", peer_addr);

        stream.set_read_timeout(Some(self.config.timeout()))?;
        stream.set_write_timeout(Some(self.config.timeout()))?;

        let raw = read_head(&mut stream, self.config.buffer_size);

        let request = match Request::parse(&raw.head) {
            Ok(request) => request,
            Err(e) => {
                error!("Request HTTP inválido de {}: {}", peer_addr, e);
                debug!("Cerrando conexión con {}", peer_addr);
                return Ok(());
            }
        };
        debug!("Request válido: {} {}", request.method().as_str(), request.resource());

        // El body arranca con lo que sobró de la lectura de headers
        let mut body = raw.remainder.as_slice().chain(&mut stream);

        if let Some(response) = self.router.dispatch(&request, &mut body) {
            let bytes = response.to_bytes();
            match stream.write_all(&bytes).and_then(|_| stream.flush()) {
                Ok(()) => info!(
                    "{} {} → {} ({} bytes)",
                    request.method().as_str(),
                    request.resource(),
                    response.status(),
                    response.body().len()
                ),
                Err(e) => error!("Error enviando respuesta a {}: {}", peer_addr, e),
            }
        } else {
            debug!("Sin respuesta para {}", request.resource());
        }

        debug!("Cerrando conexión con {}", peer_addr);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Shutdown;
    use std::thread;
    use tempfile::TempDir;

    fn test_server(web_root: &TempDir, uploads: &TempDir) -> Server {
        let mut config = Config::default();
        config.port = 0;
        config.web_root = web_root.path().to_path_buf();
        config.uploads_dir = uploads.path().to_path_buf();
        Server::bind(config).unwrap()
    }

    /// Acepta una conexión, la procesa y retorna lo que recibió el cliente
    fn exchange(server: Server, request: &[u8]) -> Vec<u8> {
        let addr = server.local_addr().unwrap();

        let t = thread::spawn(move || {
            let (stream, _) = server.listener.accept().unwrap();
            server.handle_connection(stream).unwrap();
        });

        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(request).unwrap();
        client.shutdown(Shutdown::Write).unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        t.join().unwrap();
        buf
    }

    #[test]
    fn test_bind_ephemeral_port() {
        let (web, up) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        let server = test_server(&web, &up);
        assert_ne!(server.local_addr().unwrap().port(), 0);
    }

    #[test]
    fn test_bind_rejects_invalid_config() {
        let mut config = Config::default();
        config.port = 0;
        config.backlog = 0;
        let err = Server::bind(config).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_bind_creates_uploads_dir() {
        let (web, up) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        let mut config = Config::default();
        config.port = 0;
        config.web_root = web.path().to_path_buf();
        config.uploads_dir = up.path().join("nested/uploads");
        Server::bind(config).unwrap();
        assert!(up.path().join("nested/uploads").is_dir());
    }

    #[test]
    fn test_handle_connection_forbidden() {
        let (web, up) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        let response = exchange(test_server(&web, &up), b"GET /forbidden HTTP/1.1\r\n\r\n");

        assert_eq!(
            response,
            b"HTTP/1.1 403 forbidden\r\nContent-Type: text/html\r\nContent-Length: 13\r\n\r\n403 FORBIDDEN".to_vec()
        );
    }

    #[test]
    fn test_handle_connection_invalid_method() {
        let (web, up) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        let response = exchange(test_server(&web, &up), b"DELETE /x HTTP/1.1\r\n\r\n");
        assert!(response.is_empty());
    }

    #[test]
    fn test_handle_connection_upload_body_in_first_chunk() {
        let (web, up) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        let response = exchange(
            test_server(&web, &up),
            b"POST /upload?file=a.gif HTTP/1.1\r\nContent-Length: 6\r\n\r\nGIF89a",
        );

        assert!(response.starts_with(b"HTTP/1.1 200 OK\r\n"));
        assert_eq!(fs::read(up.path().join("a.gif")).unwrap(), b"GIF89a");
    }

    #[test]
    fn test_handle_connection_peer_closed_immediately() {
        let (web, up) = (TempDir::new().unwrap(), TempDir::new().unwrap());
        let server = test_server(&web, &up);
        let addr = server.local_addr().unwrap();

        let t = thread::spawn(move || {
            let (stream, _) = server.listener.accept().unwrap();
            server.handle_connection(stream).unwrap();
        });

        drop(TcpStream::connect(addr).unwrap());
        t.join().unwrap();
    }
}
