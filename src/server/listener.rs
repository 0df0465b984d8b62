use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpSocket, TcpStream, lookup_host};
use tokio::sync::Semaphore;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::static_files::{DiskStore, FileStore};

/// Pending connections the OS queues while every worker is busy.
pub const BACKLOG: u32 = 5;

/// Pause after a failed `accept` before trying again.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(50);

/// Binds a reusable listening socket on `addr`.
pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let sock_addr: SocketAddr = lookup_host(addr)
        .await
        .with_context(|| format!("resolving {}", addr))?
        .next()
        .with_context(|| format!("no address for {}", addr))?;

    let socket = if sock_addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(sock_addr)
        .with_context(|| format!("binding {}", sock_addr))?;

    let listener = socket.listen(BACKLOG)?;
    Ok(listener)
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.listen_addr()).await?;
    info!("Server has started");

    let store = Arc::new(DiskStore::new(cfg.document_root.clone()));
    serve(listener, store, cfg.workers).await
}

/// Source of incoming connections for [`serve`].
///
/// Implemented for [`TcpListener`]; tests substitute in-memory streams.
pub trait Accept: Send + Sync + 'static {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send + 'static;

    fn accept(&self) -> impl Future<Output = io::Result<(Self::Stream, SocketAddr)>> + Send;
}

impl Accept for TcpListener {
    type Stream = TcpStream;

    async fn accept(&self) -> io::Result<(TcpStream, SocketAddr)> {
        TcpListener::accept(self).await
    }
}

/// Accept loop.
///
/// At most `workers` connections are handled at once. A worker slot is
/// claimed before `accept`, so when all are busy further clients wait in the
/// OS backlog rather than in an application queue.
///
/// A failed `accept` (out of file descriptors, connection aborted before it
/// was taken) is logged and the loop keeps going after a short pause.
pub async fn serve<A: Accept, F: FileStore>(
    listener: A,
    store: Arc<F>,
    workers: usize,
) -> anyhow::Result<()> {
    let slots = Arc::new(Semaphore::new(workers));

    loop {
        let permit = slots.clone().acquire_owned().await?;
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Failed to accept connection: {}", e);
                drop(permit);
                tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                continue;
            }
        };
        debug!("Accepted connection from {}", peer);

        let store = store.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, store);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {:?}", peer, e);
            }
            drop(permit);
        });
    }
}
