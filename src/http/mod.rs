// HTTP helpers: MIME inference, response builders, conditional requests

pub mod cache;
pub mod mime;
pub mod response;

pub use response::{
    build_301_response, build_304_response, build_404_response, build_405_response,
    build_file_response, build_html_response,
};
