//! HTTP API client.
//!
//! One endpoint: `DELETE /api/delete_image/:id`. The request resolves to a
//! typed result so the caller can sequence DOM changes after it.

use crate::config::GalleryConfig;
use gloo_net::http::Request;
use thiserror::Error;
use vg_api_types::{DeleteImageResponse, ErrorResponse};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeleteError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("{status} {status_text}: {detail}")]
    Status {
        status: u16,
        status_text: String,
        detail: String,
    },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("deletion refused: {0}")]
    Rejected(String),
}

pub fn delete_url(config: &GalleryConfig, id: &str) -> String {
    format!(
        "{}/{}",
        config.delete_endpoint.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}

/// DELETE /api/delete_image/:id
pub async fn delete_image(config: &GalleryConfig, id: &str) -> Result<DeleteImageResponse, DeleteError> {
    let url = delete_url(config, id);

    let resp = Request::delete(&url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| DeleteError::Transport(e.to_string()))?;

    let text = resp
        .text()
        .await
        .map_err(|e| DeleteError::Decode(e.to_string()))?;

    if !resp.ok() {
        return Err(DeleteError::Status {
            status: resp.status(),
            status_text: resp.status_text(),
            detail: error_detail(&text),
        });
    }

    parse_delete_body(&text)
}

/// Interpret a 2xx body.
pub fn parse_delete_body(text: &str) -> Result<DeleteImageResponse, DeleteError> {
    let body: DeleteImageResponse = serde_json::from_str(text)
        .map_err(|e| DeleteError::Decode(format!("{e}; raw: {text}")))?;
    if !body.is_success() {
        let reason = body
            .error
            .clone()
            .or_else(|| body.message.clone())
            .unwrap_or_else(|| "success: false".to_owned());
        return Err(DeleteError::Rejected(reason));
    }
    Ok(body)
}

/// The `error` field of a JSON error body, or the raw text.
pub fn error_detail(text: &str) -> String {
    serde_json::from_str::<ErrorResponse>(text)
        .ok()
        .and_then(|e| e.error)
        .unwrap_or_else(|| text.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encodes_the_id() {
        let cfg = GalleryConfig::default();
        assert_eq!(delete_url(&cfg, "7"), "/api/delete_image/7");
        assert_eq!(delete_url(&cfg, "a b/c"), "/api/delete_image/a%20b%2Fc");

        let custom = GalleryConfig {
            delete_endpoint: "/gallery/api/delete/".into(),
            ..GalleryConfig::default()
        };
        assert_eq!(delete_url(&custom, "3"), "/gallery/api/delete/3");
    }

    #[test]
    fn success_bodies_pass() {
        let ok = parse_delete_body(r#"{"success": true, "remaining_count": 4}"#).unwrap();
        assert_eq!(ok.remaining_count, Some(4));
        assert!(parse_delete_body(r#"{"message": "deleted"}"#).is_ok());
    }

    #[test]
    fn refused_body_is_an_error() {
        assert_eq!(
            parse_delete_body(r#"{"success": false, "error": "Invalid image index"}"#),
            Err(DeleteError::Rejected("Invalid image index".into()))
        );
        assert_eq!(
            parse_delete_body(r#"{"success": false}"#),
            Err(DeleteError::Rejected("success: false".into()))
        );
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(parse_delete_body("<html>oops</html>"), Err(DeleteError::Decode(_))));
        assert!(matches!(parse_delete_body(""), Err(DeleteError::Decode(_))));
    }

    #[test]
    fn error_detail_prefers_error_field() {
        assert_eq!(
            error_detail(r#"{"success": false, "error": "No results found in session."}"#),
            "No results found in session."
        );
        assert_eq!(error_detail(" Internal Server Error \n"), "Internal Server Error");
    }
}
