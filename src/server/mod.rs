// Server module entry point
// Listener creation, the accept loop, and signal-driven shutdown

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module file gets an explicit path
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::bind_listener;
pub use server_loop::run;
pub use signal::{start_signal_handler, ShutdownSignal};
