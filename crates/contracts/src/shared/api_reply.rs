use serde::{Deserialize, Serialize};

/// Reply body of every menu/order write endpoint.
///
/// Success replies carry `message`, failures carry `error`. Either may be
/// missing when the backend sends a bare status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiReply {
    pub fn message_text(&self) -> String {
        self.message.clone().unwrap_or_default()
    }

    pub fn error_text(&self) -> String {
        self.error.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_shapes() {
        let ok: ApiReply = serde_json::from_str(r#"{"message":"Quantity updated"}"#).unwrap();
        assert_eq!(ok.message_text(), "Quantity updated");
        assert_eq!(ok.error, None);

        let err: ApiReply =
            serde_json::from_str(r#"{"error":"Quantity must be non-negative"}"#).unwrap();
        assert_eq!(err.error_text(), "Quantity must be non-negative");
        assert_eq!(err.message_text(), "");

        let empty: ApiReply = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ApiReply::default());
    }
}
