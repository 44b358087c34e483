//! Resolution of stored asset references into publicly servable URLs.
//!
//! The backend stores image references either as absolute URLs
//! (`http://host:5000/TrolleyTypes/a.png`) or as bare relative paths
//! (`TrolleyTypes/a.png`). Static files are served under a single
//! `/uploads/` prefix right after the origin.

pub const UPLOADS_SEGMENT: &str = "/uploads/";

/// Splits `scheme://host[:port]/path` into origin and path (path keeps its leading `/`).
fn split_origin(url: &str) -> Option<(&str, &str)> {
    let scheme_end = url.find("://")? + 3;
    match url[scheme_end..].find('/') {
        Some(slash) => Some(url.split_at(scheme_end + slash)),
        None => Some((url, "/")),
    }
}

fn has_uploads_prefix(path: &str) -> bool {
    let lower = path.trim_start_matches('/').to_ascii_lowercase();
    lower.starts_with("uploads/")
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if has_uploads_prefix(trimmed) {
        // `Uploads/x` and `uploads/x` both become `/uploads/x`
        format!("{}{}", UPLOADS_SEGMENT, &trimmed["uploads/".len()..])
    } else {
        format!("{}{}", UPLOADS_SEGMENT, trimmed)
    }
}

/// Returns the servable URL for a stored reference, or `None` when nothing is stored.
///
/// `api_base` is used for relative references and must not end with `/`.
pub fn resolve_upload_url(api_base: &str, stored: &str) -> Option<String> {
    let stored = stored.trim();
    if stored.is_empty() {
        return None;
    }
    if stored.starts_with("data:") || stored.starts_with("blob:") {
        return Some(stored.to_string());
    }
    match split_origin(stored) {
        Some((origin, path)) => Some(format!("{}{}", origin, normalize_path(path))),
        None => Some(format!(
            "{}{}",
            api_base.trim_end_matches('/'),
            normalize_path(stored)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:5000";

    #[test]
    fn inserts_segment_into_absolute_url() {
        assert_eq!(
            resolve_upload_url(BASE, "http://10.0.0.4:5000/TrolleyTypes/cart.png").as_deref(),
            Some("http://10.0.0.4:5000/uploads/TrolleyTypes/cart.png")
        );
    }

    #[test]
    fn does_not_double_existing_segment_in_any_case() {
        assert_eq!(
            resolve_upload_url(BASE, "https://api.example.az/Uploads/Trolleys/1.jpg").as_deref(),
            Some("https://api.example.az/uploads/Trolleys/1.jpg")
        );
        assert_eq!(
            resolve_upload_url(BASE, "https://api.example.az/uploads/Trolleys/1.jpg").as_deref(),
            Some("https://api.example.az/uploads/Trolleys/1.jpg")
        );
    }

    #[test]
    fn joins_relative_reference_onto_base() {
        assert_eq!(
            resolve_upload_url("http://localhost:5000/", "TrolleyTypes/cart.png").as_deref(),
            Some("http://localhost:5000/uploads/TrolleyTypes/cart.png")
        );
        assert_eq!(
            resolve_upload_url(BASE, "/Uploads/cart.png").as_deref(),
            Some("http://localhost:5000/uploads/cart.png")
        );
    }

    #[test]
    fn origin_without_path() {
        assert_eq!(
            resolve_upload_url(BASE, "http://host:5000").as_deref(),
            Some("http://host:5000/uploads/")
        );
    }

    #[test]
    fn empty_reference_is_none() {
        assert_eq!(resolve_upload_url(BASE, "   "), None);
    }

    #[test]
    fn inline_data_is_passed_through() {
        assert_eq!(
            resolve_upload_url(BASE, "data:image/png;base64,AAAA").as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }
}
