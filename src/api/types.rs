//! Wire types for the relay number API.

use serde::{Deserialize, Serialize};

/// A candidate phone number offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayNumberSuggestion {
    pub phone_number: String,
}

/// Initial suggestions, grouped by how they relate to the user's real
/// number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionBatch {
    #[serde(default)]
    pub same_area_options: Vec<RelayNumberSuggestion>,
    #[serde(default)]
    pub other_areas_options: Vec<RelayNumberSuggestion>,
    #[serde(default)]
    pub same_prefix_options: Vec<RelayNumberSuggestion>,
}

impl SuggestionBatch {
    /// Concatenate the categorized options into one ordered sequence:
    /// same area, then other areas, then same prefix.
    pub fn flatten(&self) -> Vec<String> {
        self.same_area_options
            .iter()
            .chain(&self.other_areas_options)
            .chain(&self.same_prefix_options)
            .map(|s| s.phone_number.clone())
            .collect()
    }
}

/// A relay number already assigned to the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayNumber {
    pub number: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Request body for registering a relay number.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub number: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn suggestion(number: &str) -> RelayNumberSuggestion {
        RelayNumberSuggestion {
            phone_number: number.to_string(),
        }
    }

    #[test]
    fn flatten_preserves_category_order() {
        let batch = SuggestionBatch {
            same_area_options: vec![suggestion("5035550100"), suggestion("5035550101")],
            other_areas_options: vec![suggestion("2065550102")],
            same_prefix_options: vec![suggestion("5035550103")],
        };

        assert_eq!(
            batch.flatten(),
            vec!["5035550100", "5035550101", "2065550102", "5035550103"]
        );
    }

    #[test]
    fn flatten_of_empty_batch_is_empty() {
        assert!(SuggestionBatch::default().flatten().is_empty());
    }

    #[test]
    fn deserializes_suggestions_payload() {
        let payload = r#"{
            "same_area_options": [{"phone_number": "5035550100"}],
            "other_areas_options": [],
            "same_prefix_options": [{"phone_number": "5035550103"}]
        }"#;

        let batch: SuggestionBatch = serde_json::from_str(payload).unwrap();
        assert_eq!(batch.flatten(), vec!["5035550100", "5035550103"]);
    }

    #[test]
    fn relay_number_defaults_enabled() {
        let number: RelayNumber = serde_json::from_str(r#"{"number": "+15035550100"}"#).unwrap();
        assert!(number.enabled);
        assert_eq!(number.location, None);
    }
}
