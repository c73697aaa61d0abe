//! Query-string parsing module
//!
//! Pure, side-effect-free extraction of query parameters. Parsing never
//! fails; malformed escape sequences pass through literally.

/// Parsed query-string parameters.
///
/// Pairs are kept in request order and the first occurrence of a key wins,
/// matching how most servers resolve repeated parameters.
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a raw query string (without the leading `?`).
    pub fn parse(query: &str) -> Self {
        let mut pairs = Vec::new();
        for part in query.split('&') {
            if part.is_empty() {
                continue;
            }
            let mut kv = part.splitn(2, '=');
            let key = decode(kv.next().unwrap_or_default());
            let value = decode(kv.next().unwrap_or_default());
            pairs.push((key, value));
        }
        Self { pairs }
    }

    /// First value for `key`, or `None` when the parameter is absent.
    ///
    /// A parameter given without a value (`?count=` or bare `?count`)
    /// resolves to the empty string.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Percent-decode a query component; `+` decodes to a space.
fn decode(component: &str) -> String {
    let bytes = component.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    out.push((hi << 4) | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    // Invalid UTF-8 after decoding is replaced rather than rejected
    String::from_utf8(out)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_params() {
        let params = QueryParams::parse("city=moscow&count=2");
        assert_eq!(params.get("city"), Some("moscow"));
        assert_eq!(params.get("count"), Some("2"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_empty_query() {
        let params = QueryParams::parse("");
        assert_eq!(params.get("count"), None);
    }

    #[test]
    fn test_param_without_value() {
        let params = QueryParams::parse("count=&city");
        assert_eq!(params.get("count"), Some(""));
        assert_eq!(params.get("city"), Some(""));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let params = QueryParams::parse("count=1&count=2");
        assert_eq!(params.get("count"), Some("1"));
    }

    #[test]
    fn test_percent_decoding() {
        // "Мир" percent-encoded as UTF-8
        let params = QueryParams::parse("city=%D0%9C%D0%B8%D1%80");
        assert_eq!(params.get("city"), Some("Мир"));
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let params = QueryParams::parse("city=new+york");
        assert_eq!(params.get("city"), Some("new york"));
    }

    #[test]
    fn test_malformed_escape_passes_through() {
        let params = QueryParams::parse("city=50%25&bad=%zz&tail=%2");
        assert_eq!(params.get("city"), Some("50%"));
        assert_eq!(params.get("bad"), Some("%zz"));
        assert_eq!(params.get("tail"), Some("%2"));
    }

    #[test]
    fn test_value_containing_equals() {
        let params = QueryParams::parse("note=a=b");
        assert_eq!(params.get("note"), Some("a=b"));
    }
}
