//! Server connection plumbing.
//!
//! Parses the configured server address and dials it within the configured
//! timeout. The observability protocol itself lives on the server side;
//! this layer only opens the transport and relays bytes.

use crate::config::ConfigStore;
use crate::error::Error;
use std::path::PathBuf;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
#[cfg(unix)]
use tokio::net::UnixStream;
use tracing::debug;

/// A parsed server address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerAddr {
    /// Unix domain socket, `unix:///var/run/hubble.sock`.
    Unix(PathBuf),
    /// TCP endpoint, `tcp://host:port` or bare `host:port`.
    Tcp(String),
}

impl ServerAddr {
    /// Parse an address string as configured via `--server`.
    pub fn parse(address: &str) -> Result<Self, Error> {
        if let Some(path) = address.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(Error::InvalidAddress {
                    address: address.to_string(),
                    reason: "empty socket path".to_string(),
                });
            }
            return Ok(ServerAddr::Unix(PathBuf::from(path)));
        }

        let hostport = address.strip_prefix("tcp://").unwrap_or(address);
        match hostport.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => {
                Ok(ServerAddr::Tcp(hostport.to_string()))
            }
            _ => Err(Error::InvalidAddress {
                address: address.to_string(),
                reason: "expected unix://PATH, tcp://HOST:PORT, or HOST:PORT".to_string(),
            }),
        }
    }
}

/// An established connection to the server.
pub enum Connection {
    #[cfg(unix)]
    Unix(UnixStream),
    Tcp(TcpStream),
}

/// Dial the server named by the store, within the store's timeout.
pub async fn dial(store: &ConfigStore) -> Result<Connection, Error> {
    let address = store.server().to_string();
    let timeout = store.timeout();
    let addr = ServerAddr::parse(&address)?;
    debug!(%address, ?timeout, "dialing server");

    let connect = async {
        match &addr {
            #[cfg(unix)]
            ServerAddr::Unix(path) => UnixStream::connect(path).await.map(Connection::Unix),
            #[cfg(not(unix))]
            ServerAddr::Unix(_) => Err(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "unix sockets are not supported on this platform",
            )),
            ServerAddr::Tcp(hostport) => TcpStream::connect(hostport).await.map(Connection::Tcp),
        }
    };

    match tokio::time::timeout(timeout, connect).await {
        Ok(Ok(conn)) => Ok(conn),
        Ok(Err(source)) => Err(Error::Dial { address, source }),
        Err(_) => Err(Error::DialTimeout { address, timeout }),
    }
}

impl Connection {
    /// Send one request verb and relay the raw response to `out` until the
    /// server closes the stream.
    pub async fn request(
        self,
        verb: &str,
        out: &mut (impl AsyncWrite + Unpin),
    ) -> Result<(), Error> {
        match self {
            #[cfg(unix)]
            Connection::Unix(stream) => relay(stream, verb, out).await,
            Connection::Tcp(stream) => relay(stream, verb, out).await,
        }
    }
}

async fn relay(
    mut stream: impl AsyncRead + AsyncWrite + Unpin,
    verb: &str,
    out: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    stream.write_all(verb.as_bytes()).await?;
    stream.write_all(b"\n").await?;
    tokio::io::copy(&mut stream, out).await?;
    out.flush().await?;
    Ok(())
}
