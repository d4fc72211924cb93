use serde::{Deserialize, Serialize};

pub const DELETE_IMAGE_PREFIX: &str = "/api/delete_image";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteImageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeleteImageResponse {
    /// A 2xx body confirms the deletion unless it explicitly says otherwise.
    pub fn is_success(&self) -> bool {
        self.success != Some(false)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagged_response_reports_its_flag() {
        let ok: DeleteImageResponse = serde_json::from_str(
            r#"{"success": true, "message": "Image b.jpg deleted successfully", "remaining_count": 2}"#,
        )
        .expect("valid body");
        assert!(ok.is_success());
        assert_eq!(ok.remaining_count, Some(2));

        let rejected: DeleteImageResponse =
            serde_json::from_str(r#"{"success": false, "error": "Invalid image index"}"#)
                .expect("valid body");
        assert!(!rejected.is_success());
        assert_eq!(rejected.error.as_deref(), Some("Invalid image index"));
    }

    #[test]
    fn bare_object_counts_as_success() {
        let empty: DeleteImageResponse = serde_json::from_str("{}").expect("valid body");
        assert!(empty.is_success());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = r#"{"success": true, "results": [{"filename": "a.jpg"}], "subject": "Flare"}"#;
        let parsed: DeleteImageResponse = serde_json::from_str(body).expect("valid body");
        assert_eq!(parsed.subject.as_deref(), Some("Flare"));
    }

    #[test]
    fn error_body_keeps_only_the_message() {
        let parsed: ErrorResponse =
            serde_json::from_str(r#"{"success": false, "error": "Invalid image index"}"#)
                .expect("valid body");
        assert_eq!(parsed.error.as_deref(), Some("Invalid image index"));
    }
}
