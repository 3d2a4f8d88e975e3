//! The `{success, data}` JSON envelope used by list-bearing API responses

use serde::Deserialize;
use serde_json::Value;

/// Response envelope for the backend's list endpoints. `data` stays
/// `None` when the field is absent so callers can tell a missing listing
/// apart from an empty one.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub success: bool,
    pub data: Option<Vec<Value>>,
}

impl ApiEnvelope {
    /// Parse an envelope from a response body, mapping any shape mismatch
    /// to a single human-readable issue string.
    pub fn parse(body: &str) -> Result<Self, String> {
        serde_json::from_str(body).map_err(|_| "malformed response envelope".to_string())
    }

    /// Item count, zero when the listing is absent
    pub fn item_count(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let envelope =
            ApiEnvelope::parse(r#"{"success": true, "data": [{"id": "a1"}]}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.item_count(), 1);
    }

    #[test]
    fn test_parse_missing_data_is_none() {
        let envelope = ApiEnvelope::parse(r#"{"success": true}"#).unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.item_count(), 0);
    }

    #[test]
    fn test_parse_non_list_data_is_an_issue_string() {
        let err = ApiEnvelope::parse(r#"{"success": true, "data": "oops"}"#).unwrap_err();
        assert_eq!(err, "malformed response envelope");
    }

    #[test]
    fn test_parse_malformed_is_an_issue_string() {
        let err = ApiEnvelope::parse("not json").unwrap_err();
        assert_eq!(err, "malformed response envelope");
    }
}
