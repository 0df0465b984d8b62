use std::sync::Arc;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::http::parser::{is_complete, parse_request};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::static_files::{FileStore, ResolvedTarget};

const READ_CHUNK: usize = 1024;

/// One client connection, serving exactly one request.
pub struct Connection<S, F> {
    stream: S,
    store: Arc<F>,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S, F> Connection<S, F>
where
    S: AsyncRead + AsyncWrite + Unpin,
    F: FileStore,
{
    pub fn new(stream: S, store: Arc<F>) -> Self {
        Self {
            stream,
            store,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection to completion.
    ///
    /// An error means the exchange broke off mid-way (read, write or shutdown
    /// failed); the caller logs it and drops the socket. No attempt is made
    /// to send a response after a transport failure.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    let req = self.read_request().await?;
                    self.state = ConnectionState::Processing(req);
                }

                ConnectionState::Processing(req) => {
                    let response = Self::handle_request(&self.store, &req).await;
                    info!("{} {} {}", req.method_name(), req.path, response.status.as_u16());

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(mut writer) => {
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("writing response")?;
                    // No keep-alive: one request per connection
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    self.stream
                        .shutdown()
                        .await
                        .context("closing connection")?;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the request head is complete or the client stops sending.
    ///
    /// There is no size cap; a client that never sends a blank line keeps
    /// this worker busy until it disconnects.
    pub async fn read_request(&mut self) -> anyhow::Result<Request> {
        let mut temp = [0u8; READ_CHUNK];

        loop {
            let n = self
                .stream
                .read(&mut temp)
                .await
                .context("reading request")?;

            if n == 0 {
                // Client closed its side; parse whatever arrived
                break;
            }

            self.buffer.extend_from_slice(&temp[..n]);

            if is_complete(&self.buffer) {
                break;
            }
        }

        Ok(parse_request(&self.buffer))
    }

    /// Applies the decision table: 404, then 403, then 405, then HEAD/GET.
    pub async fn handle_request(store: &F, req: &Request) -> Response {
        let target = ResolvedTarget::resolve(store, &req.path).await;
        let version = req.http_version();

        if !target.exists {
            return Response::not_found(version);
        }

        let Some(mime_type) = target.mime_type else {
            info!("Extension of {} is not allowed", req.path);
            return Response::forbidden(version);
        };

        match &req.method {
            // HEAD sends the headers GET would, Content-Type included, without the body
            Some(Method::HEAD) => match store.size(&target.filesystem_path).await {
                Ok(len) => ResponseBuilder::new(StatusCode::Ok)
                    .version(version)
                    .content_type(mime_type)
                    .content_length(len)
                    .build(),
                Err(e) => {
                    warn!("Could not stat {}: {}", target.filesystem_path.display(), e);
                    Response::not_found(version)
                }
            },

            Some(Method::GET) => match store.read(&target.filesystem_path).await {
                Ok(contents) => ResponseBuilder::new(StatusCode::Ok)
                    .version(version)
                    .content_type(mime_type)
                    .body(contents)
                    .build(),
                Err(e) => {
                    warn!("Could not read {}: {}", target.filesystem_path.display(), e);
                    Response::not_found(version)
                }
            },

            Some(Method::OTHER(_)) | None => Response::method_not_allowed(version),
        }
    }
}
