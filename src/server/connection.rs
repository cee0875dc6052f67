// Connection serving module
// Serves one HTTP/1 connection to completion on the calling task.

use crate::config::ServerConfig;
use crate::handler;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpStream;

/// Serve a single connection inline.
///
/// Awaited by the accept loop rather than spawned: exactly one connection
/// is processed at a time. Keep-alive is disabled so the connection ends
/// after its response and the loop can accept the next client.
pub async fn serve_connection(stream: TcpStream, config: Arc<ServerConfig>) {
    let io = TokioIo::new(stream);

    let conn = http1::Builder::new()
        .keep_alive(false)
        .serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move { handler::handle_request(req, config).await }
            }),
        );

    if let Err(err) = conn.await {
        logger::log_connection_error(&err);
    }
}
