//! Logging helpers.
//!
//! Response bodies can carry zone files, certificate material, and tokens;
//! debug logs only ever include a bounded prefix.

/// Longest body prefix included in debug/error log lines, in bytes.
const LOG_BODY_LIMIT: usize = 256;

/// Bound a response body for logging.
///
/// Bodies at or under the limit pass through unchanged. Longer ones are cut
/// at the last char boundary within the limit, with the total size appended
/// so a truncated line is still useful when debugging.
pub(crate) fn truncate_for_log(body: &str) -> String {
    if body.len() <= LOG_BODY_LIMIT {
        return body.to_string();
    }
    let mut cut = LOG_BODY_LIMIT;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &body[..cut], body.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_within_limit_passes_through() {
        let body = r#"{"data":{"id":1,"name":"example.com"}}"#;
        assert_eq!(truncate_for_log(body), body);
    }

    #[test]
    fn long_body_keeps_prefix_and_reports_total_size() {
        let body = format!(r#"{{"data":{{"zone":"{}"}}}}"#, "A".repeat(4096));
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with(r#"{"data":{"zone":"#));
        assert!(logged.ends_with(&format!("[truncated, total {} bytes]", body.len())));
    }

    #[test]
    fn cut_never_lands_inside_a_multibyte_char() {
        // 3-byte chars guarantee the limit falls mid-character
        let body = "例".repeat(LOG_BODY_LIMIT);
        let logged = truncate_for_log(&body);
        assert!(logged.len() < body.len());
        assert!(logged.chars().take_while(|c| *c == '例').count() > 0);
    }
}
