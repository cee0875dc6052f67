// Server loop module
// The accept loop: LISTENING until the shutdown token trips, then STOPPED.

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::serve_connection;
use super::signal::ShutdownSignal;
use crate::config::ServerConfig;
use crate::logger;

/// Run the accept loop until shutdown is requested.
///
/// Connections are served sequentially: each accepted stream is awaited to
/// completion before the next accept. The shutdown flag is re-checked at
/// the top of every iteration so a signal arriving mid-connection is not
/// lost between `notify` wakeups.
pub async fn run(
    listener: TcpListener,
    config: Arc<ServerConfig>,
    shutdown: Arc<ShutdownSignal>,
) -> std::io::Result<()> {
    loop {
        if shutdown.is_requested() {
            break;
        }

        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        serve_connection(stream, Arc::clone(&config)).await;
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                break;
            }
        }
    }

    // Dropping the listener releases the port
    Ok(())
}
