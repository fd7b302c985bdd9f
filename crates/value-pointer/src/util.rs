//! Pointer string handling: escaping and splitting into keys.

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and then `~0` with `~`. Anything
/// else, including a dangling `~`, is kept as is.
///
/// # Example
///
/// ```
/// use value_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("~01"), "~1");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 before ~0, otherwise "~01" would decode to "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// # Example
///
/// ```
/// use value_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a pointer string into unescaped keys.
///
/// The empty pointer addresses the root and yields no keys. Otherwise one
/// leading `/` is stripped, if present, and the rest is split on `/`.
/// Parsing never fails; bad keys surface during traversal.
///
/// # Example
///
/// ```
/// use value_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/"), vec![""]);
/// assert_eq!(parse_json_pointer("/foo/a~1b"), vec!["foo", "a/b"]);
/// assert_eq!(parse_json_pointer("foo/bar"), vec!["foo", "bar"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    let rest = pointer.strip_prefix('/').unwrap_or(pointer);
    rest.split('/').map(unescape_component).collect()
}

/// Format keys back into a pointer string.
///
/// # Example
///
/// ```
/// use value_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["a/b".to_string(), "0".to_string()]), "/a~1b/0");
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Check a key against the RFC 6901 `array-index` grammar: `0`, or digits
/// without a leading zero.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parse a key as a sequence index.
///
/// In lenient mode anything `usize` parses is accepted (`"01"`, `"+1"`).
/// In strict mode the key must also satisfy [`is_valid_index`].
pub fn parse_index(key: &str, strict: bool) -> Option<usize> {
    if strict && !is_valid_index(key) {
        return None;
    }
    key.parse().ok()
}
