use crate::config::ServerConfig;

/// How many root entries the startup banner shows at most.
pub const BANNER_SAMPLE_LIMIT: usize = 10;

pub fn log_server_start(config: &ServerConfig, sample: &[String]) {
    println!("======================================");
    println!("Static file server started");
    println!("Serving at: http://localhost:{}", config.port);
    println!("Serving root: {}", config.root.display());
    if sample.is_empty() {
        println!("(serving root is empty)");
    } else {
        println!("First {} entries:", sample.len());
        for name in sample {
            println!("  {name}");
        }
    }
    println!("Press Ctrl+C to stop");
    println!("======================================\n");
}

pub fn log_shutdown() {
    println!("\nServer stopped. Goodbye!");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
