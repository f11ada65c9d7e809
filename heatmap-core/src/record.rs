//! Records as delivered by the record source.

use serde::{Deserialize, Serialize};

/// One row from the record source, reduced to its date property.
///
/// The shape mirrors a Notion date property value:
/// `{ "date": { "start": "2024-03-05T10:00:00Z", "end": null } }`.
/// Anything else on the source row is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub date: Option<DateValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    #[serde(default)]
    pub start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl Record {
    /// Record whose date property starts at `start`.
    pub fn starting(start: impl Into<String>) -> Self {
        Record {
            date: Some(DateValue {
                start: Some(start.into()),
                end: None,
            }),
        }
    }

    /// The raw start value, if the record carries one.
    pub fn start(&self) -> Option<&str> {
        self.date.as_ref()?.start.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_notion_date_property() {
        let value = serde_json::json!({
            "id": "%3AbC",
            "type": "date",
            "date": { "start": "2024-03-05T10:00:00.000+01:00", "end": null, "time_zone": null }
        });

        let record: Record = serde_json::from_value(value).unwrap();
        assert_eq!(record.start(), Some("2024-03-05T10:00:00.000+01:00"));
    }

    #[test]
    fn empty_date_property_has_no_start() {
        let record: Record = serde_json::from_value(serde_json::json!({ "date": null })).unwrap();
        assert_eq!(record.start(), None);

        let record: Record = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(record.start(), None);

        let record: Record =
            serde_json::from_value(serde_json::json!({ "date": { "start": null } })).unwrap();
        assert_eq!(record.start(), None);
    }
}
