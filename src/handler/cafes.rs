//! Cafe listing endpoint
//!
//! The core of the service: validate `count` and `city` query parameters,
//! look the city up in the catalog, and return the first `count` cafe names
//! joined with commas.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::catalog::CafeCatalog;
use crate::http::{self, QueryParams};

/// Why a cafe request was rejected. The bodies are part of the HTTP
/// contract and must match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CafeQueryError {
    /// `count` parameter absent or empty
    MissingCount,
    /// `count` present but not a non-negative decimal integer
    MalformedCount,
    /// `city` missing from the catalog (or not supplied at all)
    UnknownCity,
}

impl CafeQueryError {
    /// Exact response body for this rejection.
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingCount => "count missing",
            Self::MalformedCount => "wrong count value",
            Self::UnknownCity => "wrong city value",
        }
    }
}

/// Resolve a cafe listing from parsed query parameters.
///
/// Validation order is fixed: a missing count is reported before a
/// malformed count, which is reported before an unknown city. `count`
/// parses as an unsigned integer, so negative values are rejected as
/// malformed rather than sliced with.
pub fn resolve(params: &QueryParams, catalog: &CafeCatalog) -> Result<String, CafeQueryError> {
    let count_raw = params.get("count").unwrap_or("");
    if count_raw.is_empty() {
        return Err(CafeQueryError::MissingCount);
    }

    let count: usize = count_raw
        .parse()
        .map_err(|_| CafeQueryError::MalformedCount)?;

    let city = params.get("city").unwrap_or("");
    let cafes = catalog.get(city).ok_or(CafeQueryError::UnknownCity)?;

    let effective_count = count.min(cafes.len());
    Ok(cafes[..effective_count].join(","))
}

/// HTTP wrapper around [`resolve`].
pub fn handle(query: Option<&str>, catalog: &CafeCatalog, is_head: bool) -> Response<Full<Bytes>> {
    let params = QueryParams::parse(query.unwrap_or(""));
    match resolve(&params, catalog) {
        Ok(listing) => http::build_text_response(StatusCode::OK, &listing, is_head),
        Err(e) => http::build_text_response(StatusCode::BAD_REQUEST, e.message(), is_head),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_query(query: &str) -> Result<String, CafeQueryError> {
        resolve(&QueryParams::parse(query), &CafeCatalog::builtin())
    }

    #[test]
    fn test_valid_request_truncates_in_order() {
        let listing = resolve_query("city=moscow&count=2").unwrap();
        assert_eq!(listing, "Мир кофе,Сладкоежка");
    }

    #[test]
    fn test_count_above_len_returns_all() {
        let listing = resolve_query("city=moscow&count=10").unwrap();
        assert_eq!(listing.split(',').count(), 4);
        assert_eq!(
            listing,
            "Мир кофе,Сладкоежка,Кофе и завтраки,Сытый студент"
        );
    }

    #[test]
    fn test_count_zero_is_empty_success() {
        let listing = resolve_query("city=moscow&count=0").unwrap();
        assert_eq!(listing, "");
    }

    #[test]
    fn test_missing_count() {
        assert_eq!(resolve_query("city=moscow"), Err(CafeQueryError::MissingCount));
        assert_eq!(
            resolve_query("city=moscow&count="),
            Err(CafeQueryError::MissingCount)
        );
    }

    #[test]
    fn test_missing_count_reported_before_bad_city() {
        // Validation order: count checks come first even when city is bad too
        assert_eq!(resolve_query("city=unknown"), Err(CafeQueryError::MissingCount));
        assert_eq!(
            resolve_query("city=unknown&count=abc"),
            Err(CafeQueryError::MalformedCount)
        );
    }

    #[test]
    fn test_malformed_count() {
        assert_eq!(
            resolve_query("city=moscow&count=abc"),
            Err(CafeQueryError::MalformedCount)
        );
        assert_eq!(
            resolve_query("city=moscow&count=2.5"),
            Err(CafeQueryError::MalformedCount)
        );
    }

    #[test]
    fn test_negative_count_rejected_as_malformed() {
        assert_eq!(
            resolve_query("city=moscow&count=-1"),
            Err(CafeQueryError::MalformedCount)
        );
    }

    #[test]
    fn test_unknown_city() {
        assert_eq!(
            resolve_query("city=unknown&count=2"),
            Err(CafeQueryError::UnknownCity)
        );
        // City absent entirely is the same as an unknown city
        assert_eq!(resolve_query("count=2"), Err(CafeQueryError::UnknownCity));
    }

    #[test]
    fn test_error_bodies_match_contract() {
        assert_eq!(CafeQueryError::MissingCount.message(), "count missing");
        assert_eq!(CafeQueryError::MalformedCount.message(), "wrong count value");
        assert_eq!(CafeQueryError::UnknownCity.message(), "wrong city value");
    }

    #[test]
    fn test_repeated_requests_identical() {
        let first = resolve_query("city=moscow&count=3").unwrap();
        let second = resolve_query("city=moscow&count=3").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_handle_maps_errors_to_400() {
        let catalog = CafeCatalog::builtin();
        let resp = handle(Some("city=unknown&count=2"), &catalog, false);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = handle(Some("city=moscow&count=2"), &catalog, false);
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = handle(None, &catalog, false);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
