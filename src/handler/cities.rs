//! City listing endpoint
//!
//! Read-only discovery of the catalog's city keys. The table itself is not
//! manageable over HTTP.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::catalog::CafeCatalog;
use crate::http;

/// Serve the sorted city keys as JSON.
pub fn handle(catalog: &CafeCatalog, is_head: bool) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "cities": catalog.city_names() });
    http::build_json_response(StatusCode::OK, &body, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cities_listing() {
        let resp = handle(&CafeCatalog::builtin(), false);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
            "application/json"
        );
    }
}
