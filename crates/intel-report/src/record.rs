//! Records returned by IntelGraph and the links between them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ReportError;

/// Link type whose target is resolved to an alert title.
pub const INTELLIGENCE_ALERT: &str = "intelligence_alert";

/// One fetched record.
///
/// Fields are kept exactly as the API sent them. Whether a field is present
/// decides whether it is rendered; a present `null` still counts as present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Wrap a search result. Only JSON objects are records.
    pub fn from_value(value: Value) -> Result<Self, ReportError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ReportError::InvalidRecord(format!(
                "expected an object, got {}",
                type_name(&other)
            ))),
        }
    }

    /// Raw field access.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Display text for an optional field.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(display_value)
    }

    /// Display text for a field the renderer cannot do without.
    pub fn required_text(&self, name: &str) -> Result<String, ReportError> {
        self.text(name).ok_or_else(|| ReportError::missing(name))
    }

    /// Display text of each item of a list field. A scalar is a one-item list.
    pub fn list(&self, name: &str) -> Option<Vec<String>> {
        self.get(name).map(|value| match value {
            Value::Array(items) => items.iter().map(display_value).collect(),
            other => vec![display_value(other)],
        })
    }

    /// Heading of the record: `title` when present, else `key`.
    pub fn heading(&self) -> Result<String, ReportError> {
        self.text("title")
            .or_else(|| self.text("key"))
            .ok_or_else(|| ReportError::missing("key"))
    }

    /// The record's outgoing links, empty when the field is absent.
    pub fn links(&self) -> Result<Vec<Reference>, ReportError> {
        let Some(value) = self.get("links") else {
            return Ok(Vec::new());
        };

        let Value::Array(items) = value else {
            return Err(ReportError::InvalidRecord(format!(
                "'links' must be an array, got {}",
                type_name(value)
            )));
        };

        items
            .iter()
            .map(|item| {
                Reference::deserialize(item)
                    .map_err(|e| ReportError::InvalidRecord(format!("bad link: {}", e)))
            })
            .collect()
    }
}

/// A typed edge from a record to another entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Relationship kind, e.g. `intelligence_alert` or `domain`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Target identifier, used for intelligence alerts.
    #[serde(default)]
    pub uuid: Option<String>,
    /// Target key, used for every other kind.
    #[serde(default)]
    pub key: Option<String>,
    /// Free-text relationship label.
    #[serde(default)]
    pub relationship: Option<String>,
}

impl Reference {
    pub fn is_intelligence_alert(&self) -> bool {
        self.kind == INTELLIGENCE_ALERT
    }
}

/// Strings verbatim, everything else as JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn test_non_object_rejected() {
        let err = Record::from_value(json!(["a"])).unwrap_err();
        assert!(matches!(err, ReportError::InvalidRecord(msg) if msg.contains("an array")));
    }

    #[test]
    fn test_heading_prefers_title() {
        let r = record(json!({"key": "k", "title": "Readable title"}));
        assert_eq!(r.heading().unwrap(), "Readable title");

        let r = record(json!({"key": "k"}));
        assert_eq!(r.heading().unwrap(), "k");

        let r = record(json!({"severity": 1}));
        assert!(matches!(r.heading(), Err(ReportError::MissingField { field }) if field == "key"));
    }

    #[test]
    fn test_text_keeps_strings_verbatim() {
        let r = record(json!({
            "created_on": "2020-01-01T00:00:00.000Z",
            "severity": 7,
            "meta_data": null
        }));

        assert_eq!(r.text("created_on").unwrap(), "2020-01-01T00:00:00.000Z");
        assert_eq!(r.text("severity").unwrap(), "7");
        assert_eq!(r.text("meta_data").unwrap(), "null");
        assert!(r.text("abstract").is_none());
    }

    #[test]
    fn test_list_field() {
        let r = record(json!({"threat_types": ["Cyber Crime", "Cyber Espionage"], "last_seen_as": "MALWARE_C2"}));

        assert_eq!(
            r.list("threat_types").unwrap(),
            vec!["Cyber Crime".to_string(), "Cyber Espionage".to_string()]
        );
        assert_eq!(r.list("last_seen_as").unwrap(), vec!["MALWARE_C2".to_string()]);
        assert!(r.list("missing").is_none());
    }

    #[test]
    fn test_links_parse() {
        let r = record(json!({"links": [
            {"type": "intelligence_alert", "uuid": "abc-123", "key": "x", "relationship": "y"},
            {"type": "domain", "key": "evil.example.com", "relationship": "resolves"}
        ]}));

        let links = r.links().unwrap();
        assert_eq!(links.len(), 2);
        assert!(links[0].is_intelligence_alert());
        assert_eq!(links[0].uuid.as_deref(), Some("abc-123"));
        assert!(!links[1].is_intelligence_alert());
        assert_eq!(links[1].key.as_deref(), Some("evil.example.com"));
        assert!(links[1].uuid.is_none());
    }

    #[test]
    fn test_links_absent_or_invalid() {
        assert!(record(json!({})).links().unwrap().is_empty());
        assert!(record(json!({"links": "nope"})).links().is_err());
        assert!(record(json!({"links": [{"type": 5}]})).links().is_err());
    }

    #[test]
    fn test_serializes_transparently() {
        let r = record(json!({"key": "k", "severity": 3}));
        assert_eq!(serde_json::to_value(&r).unwrap(), json!({"key": "k", "severity": 3}));
    }
}
