use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::BatchStatus;

/// A file attached to generated outreach (image, PDF).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub name: String,
    /// Base64 payload, either bare or as a `data:` URL.
    pub data: String,
    pub mime_type: String,
}

impl Asset {
    /// The base64 payload with any `data:<mime>;base64,` prefix removed.
    #[must_use]
    pub fn payload(&self) -> &str {
        if self.data.starts_with("data:") {
            self.data
                .split_once(',')
                .map_or("", |(_, payload)| payload)
        } else {
            &self.data
        }
    }
}

/// One recipient row from an uploaded campaign CSV.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BatchRow {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Failure detail for a failed row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: BatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl BatchRow {
    #[must_use]
    pub fn pending(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            company: None,
            message: None,
            status: BatchStatus::Pending,
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(data: &str) -> Asset {
        Asset {
            name: "deck.png".into(),
            data: data.into(),
            mime_type: "image/png".into(),
        }
    }

    #[test]
    fn payload_strips_data_url_prefix() {
        assert_eq!(asset("data:image/png;base64,iVBORw0K").payload(), "iVBORw0K");
    }

    #[test]
    fn payload_passes_bare_base64_through() {
        assert_eq!(asset("iVBORw0K").payload(), "iVBORw0K");
    }

    #[test]
    fn payload_of_malformed_data_url_is_empty() {
        assert_eq!(asset("data:image/png;base64").payload(), "");
    }
}
