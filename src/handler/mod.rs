// Request handling: routing, static files, directory listings

pub mod listing;
pub mod router;
pub mod static_files;

pub use router::handle_request;
