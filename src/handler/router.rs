//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, path
//! dispatch, and access logging.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};

use crate::config::AppState;
use crate::handler::{cafes, cities};
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let is_head = method == Method::HEAD;

    // 1. Method gate, 2. body size bound, 3. path dispatch
    let response = if let Some(resp) = check_http_method(&method, state.config.http.enable_cors) {
        resp
    } else if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        resp
    } else {
        route_request(uri.path(), uri.query(), &state, is_head)
    };

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            remote_addr.to_string(),
            method.to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = content_length(&response);
        entry.referer = header_value(&req, "referer");
        entry.user_agent = header_value(&req, "user-agent");
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return the response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate the Content-Length header and return 413 when it exceeds the
/// configured bound. An unparsable header skips the check.
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let size = req
        .headers()
        .get("content-length")?
        .to_str()
        .ok()?
        .parse::<u64>()
        .ok()?;

    if size > max_body_size {
        logger::log_warning(&format!(
            "Request body too large: {size} bytes (max: {max_body_size})"
        ));
        return Some(http::build_413_response());
    }
    None
}

/// Route request based on path and configuration
fn route_request(
    path: &str,
    query: Option<&str>,
    state: &AppState,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let routes = &state.config.routes;

    // Health probes answer first, before any endpoint logic
    if routes.health.enabled
        && (path == routes.health.liveness_path || path == routes.health.readiness_path)
    {
        return http::build_health_response(is_head);
    }

    if path == routes.cafe_path {
        return cafes::handle(query, &state.catalog, is_head);
    }

    if path == routes.cities_path {
        return cities::handle(&state.catalog, is_head);
    }

    http::build_404_response()
}

/// Response body size as reported by its own Content-Length header.
fn content_length(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}
