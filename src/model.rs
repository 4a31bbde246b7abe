use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::MealError;

/// Lightweight listing entry for one recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealSummary {
    pub name: String,
    pub thumbnail_url: String,
    pub id: String,
}

impl MealSummary {
    /// All three fields are non-empty
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.thumbnail_url.is_empty() && !self.id.is_empty()
    }
}

/// Full recipe entry with formatted ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealDetail {
    pub name: String,
    pub instructions: String,
    /// Each entry is `"<measurement> <ingredient>"`, ordered by upstream index
    pub ingredients: Vec<String>,
    pub source_link: Option<String>,
    pub youtube_link: Option<String>,
}

/// Summary record as it appears on the wire.
///
/// Fields are optional here so that `null` or missing values end up in the
/// completeness filter instead of failing the whole list.
#[derive(Debug, Deserialize)]
pub(crate) struct SummaryRecord {
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail_url: Option<String>,
    #[serde(rename = "idMeal", default)]
    id: Option<String>,
}

impl From<SummaryRecord> for MealSummary {
    fn from(record: SummaryRecord) -> Self {
        MealSummary {
            name: record.name.unwrap_or_default(),
            thumbnail_url: record.thumbnail_url.unwrap_or_default(),
            id: record.id.unwrap_or_default(),
        }
    }
}

/// `{ "meals": [...] }` envelope returned by the filter endpoint.
///
/// `meals` must be present; only an explicit `null` stands for "no meals".
#[derive(Debug, Deserialize)]
pub(crate) struct SummaryEnvelope {
    #[serde(deserialize_with = "Option::deserialize")]
    pub meals: Option<Vec<SummaryRecord>>,
}

/// `{ "meals": [...] }` envelope returned by the lookup endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct DetailEnvelope {
    #[serde(deserialize_with = "Option::deserialize")]
    pub meals: Option<Vec<Option<RawMeal>>>,
}

impl DetailEnvelope {
    /// First record of the envelope, if there is a non-null one in front
    pub fn into_first(self) -> Option<RawMeal> {
        self.meals?.into_iter().next().flatten()
    }
}

/// Raw meal object: string keys mapped to string or `null` values
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawMeal(HashMap<String, Option<String>>);

impl RawMeal {
    /// Parse a single raw meal object from JSON text
    pub fn from_json(json: &str) -> Result<Self, MealError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Value for `key`, or `None` when the key is absent or `null`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Option<String>>> for RawMeal {
    fn from(fields: HashMap<String, Option<String>>) -> Self {
        RawMeal(fields)
    }
}

impl<K, V> FromIterator<(K, V)> for RawMeal
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RawMeal(
            iter.into_iter()
                .map(|(key, value)| (key.into(), Some(value.into())))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_completeness() {
        let summary = MealSummary {
            name: "Apam balik".to_string(),
            thumbnail_url: "https://example.com/apam.jpg".to_string(),
            id: "53049".to_string(),
        };
        assert!(summary.is_complete());

        let missing_thumb = MealSummary {
            thumbnail_url: String::new(),
            ..summary.clone()
        };
        assert!(!missing_thumb.is_complete());

        let missing_id = MealSummary {
            id: String::new(),
            ..summary
        };
        assert!(!missing_id.is_complete());
    }

    #[test]
    fn test_summary_record_nulls_become_empty() {
        let record: SummaryRecord =
            serde_json::from_str(r#"{"strMeal": null, "idMeal": "1"}"#).unwrap();
        let summary = MealSummary::from(record);
        assert_eq!(summary.name, "");
        assert_eq!(summary.thumbnail_url, "");
        assert_eq!(summary.id, "1");
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_raw_meal_null_and_absent_are_none() {
        let raw = RawMeal::from_json(r#"{"strMeal": "Tart", "strSource": null}"#).unwrap();
        assert_eq!(raw.get("strMeal"), Some("Tart"));
        assert_eq!(raw.get("strSource"), None);
        assert_eq!(raw.get("strYoutube"), None);
        assert_eq!(raw.len(), 2);
    }

    #[test]
    fn test_raw_meal_rejects_non_string_values() {
        let result = RawMeal::from_json(r#"{"strMeal": "Tart", "idMeal": 52768}"#);
        assert!(matches!(result, Err(MealError::DecodeFailure(_))));
    }

    #[test]
    fn test_detail_envelope_first_record() {
        let envelope: DetailEnvelope =
            serde_json::from_str(r#"{"meals": [{"strMeal": "A"}, {"strMeal": "B"}]}"#).unwrap();
        let first = envelope.into_first().unwrap();
        assert_eq!(first.get("strMeal"), Some("A"));
    }

    #[test]
    fn test_detail_envelope_empty_shapes() {
        for json in [r#"{"meals": []}"#, r#"{"meals": null}"#, r#"{"meals": [null]}"#] {
            let envelope: DetailEnvelope = serde_json::from_str(json).unwrap();
            assert!(envelope.into_first().is_none(), "expected no record for {json}");
        }
    }

    #[test]
    fn test_envelopes_require_meals_key() {
        for json in [r#"{}"#, r#"[]"#, r#"{"error": "rate limited"}"#] {
            assert!(
                serde_json::from_str::<DetailEnvelope>(json).is_err(),
                "detail envelope accepted {json}"
            );
            assert!(
                serde_json::from_str::<SummaryEnvelope>(json).is_err(),
                "summary envelope accepted {json}"
            );
        }
    }
}
