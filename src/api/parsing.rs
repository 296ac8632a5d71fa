//! Extraction helpers over the raw Lambda event payload.
//!
//! Tolerant of both API Gateway payload formats: v2 (`rawPath`,
//! `requestContext.http.method`, `rawQueryString`) and v1 (`path`,
//! `httpMethod`, `queryStringParameters`).

use serde_json::Value;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// The request path, from either payload format.
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// The HTTP method, from either payload format.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

/// A single query-string parameter, from either payload format.
pub fn query_param(payload: &Value, name: &str) -> Option<String> {
    payload
        .get("rawQueryString")
        .and_then(|q| q.as_str())
        .and_then(|q| {
            q.split('&').find_map(|kv| {
                let (key, value) = kv.split_once('=')?;
                if key == name {
                    Some(value.to_string())
                } else {
                    None
                }
            })
        })
        .or_else(|| {
            payload
                .get("queryStringParameters")
                .and_then(|m| m.get(name))
                .and_then(|v| v.as_str())
                .map(std::string::ToString::to_string)
        })
}

/// The trailing path segment after `prefix`, e.g. the record id in
/// `DELETE /api/greetings/{id}`. Returns `None` when the path ends at the
/// prefix or names a different resource.
pub fn path_suffix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let idx = path.find(prefix)?;
    let rest = &path[idx + prefix.len()..];
    if !rest.starts_with('/') {
        return None;
    }
    let rest = rest.trim_matches('/');
    if rest.is_empty() { None } else { Some(rest) }
}
