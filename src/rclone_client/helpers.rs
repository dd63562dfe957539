use serde::Deserialize;

pub const CORE_STATS_PATH: &str = "core/stats";
pub const VFS_STATS_PATH: &str = "vfs/stats";

/// Origin used when no rc address is configured: rclone's own rc listener.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:5572";

/// Resolve the configured `host:port` into a base URL.
pub fn origin_for(rc_addr: &str) -> String {
    let trimmed = rc_addr.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_ORIGIN.to_string()
    } else if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Debug, Deserialize)]
struct RcErrorBody {
    error: String,
}

/// rclone answers failed rc calls with `{"error": "...", ...}`.
pub fn extract_rc_error(body: &str) -> Option<String> {
    serde_json::from_str::<RcErrorBody>(body)
        .ok()
        .map(|parsed| parsed.error.trim().to_string())
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_address_uses_default_origin() {
        assert_eq!(origin_for(""), DEFAULT_ORIGIN);
        assert_eq!(origin_for("  "), DEFAULT_ORIGIN);
    }

    #[test]
    fn host_port_gets_http_scheme() {
        assert_eq!(origin_for("10.0.0.5:5572"), "http://10.0.0.5:5572");
        assert_eq!(origin_for("https://nas.local:5572/"), "https://nas.local:5572");
    }

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://127.0.0.1:5572/", "/core/stats"),
            "http://127.0.0.1:5572/core/stats"
        );
    }

    #[test]
    fn rc_error_body_is_extracted() {
        let body = r#"{"error":"couldn't find method \"vfs/stats\"","input":{},"path":"vfs/stats","status":404}"#;
        assert_eq!(
            extract_rc_error(body).as_deref(),
            Some("couldn't find method \"vfs/stats\"")
        );
        assert_eq!(extract_rc_error("not json"), None);
    }
}
