//! HTTP protocol layer module
//!
//! Protocol-level helpers (query parsing, response building) decoupled from
//! the service endpoints.

pub mod query;
pub mod response;

// Re-export commonly used types
pub use query::QueryParams;
pub use response::{
    build_404_response, build_405_response, build_413_response, build_health_response,
    build_json_response, build_options_response, build_text_response,
};
