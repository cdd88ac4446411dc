use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod config;
pub mod error;

pub use error::{CatalogError, QueryExecutionError, SelectionError};

/// One labeled, counted aggregation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRow {
    /// URI or literal identifying a type, property or value.
    /// Empty for count-only queries.
    pub label: String,
    pub count: u64,
}

impl CandidateRow {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// A value descriptor inside a SPARQL JSON binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RdfValue {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// One solution row: variable name -> value descriptor.
pub type Binding = HashMap<String, RdfValue>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultHead {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    pub bindings: Vec<Binding>,
}

/// SPARQL 1.1 Query Results JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub head: ResultHead,
    pub results: ResultSet,
}

impl SparqlResults {
    pub fn vars(&self) -> &[String] {
        &self.head.vars
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.results.bindings
    }

    pub fn is_empty(&self) -> bool {
        self.results.bindings.is_empty()
    }

    /// Lexical value of `var` in the given row, if bound.
    pub fn value_at(&self, row: usize, var: &str) -> Option<&str> {
        self.results
            .bindings
            .get(row)
            .and_then(|b| b.get(var))
            .map(|v| v.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_deserialization() {
        let json = r#"{
            "head": {"vars": ["type", "count"]},
            "results": {"bindings": [
                {"type": {"type": "uri", "value": "http://schema.org/Person"},
                 "count": {"type": "literal", "datatype": "http://www.w3.org/2001/XMLSchema#integer", "value": "100"}}
            ]}
        }"#;
        let results: SparqlResults = serde_json::from_str(json).expect("Failed to deserialize");

        assert_eq!(results.vars(), &["type".to_string(), "count".to_string()]);
        assert_eq!(results.bindings().len(), 1);
        assert_eq!(results.value_at(0, "type"), Some("http://schema.org/Person"));
        assert_eq!(results.value_at(0, "count"), Some("100"));
        assert_eq!(results.bindings()[0]["type"].kind.as_deref(), Some("uri"));
        assert!(results.value_at(1, "type").is_none());
    }

    #[test]
    fn test_missing_head_defaults() {
        let json = r#"{"results": {"bindings": []}}"#;
        let results: SparqlResults = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(results.vars().is_empty());
        assert!(results.is_empty());
    }

    #[test]
    fn test_missing_bindings_rejected() {
        let json = r#"{"head": {"vars": []}, "results": {}}"#;
        assert!(serde_json::from_str::<SparqlResults>(json).is_err());
    }

    #[test]
    fn test_language_tag_roundtrip() {
        let json = r#"{"type": "literal", "value": "Bach", "xml:lang": "de"}"#;
        let value: RdfValue = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(value.lang.as_deref(), Some("de"));
        let out = serde_json::to_value(&value).expect("Failed to serialize");
        assert_eq!(out["xml:lang"], "de");
        assert!(out.get("datatype").is_none());
    }
}
