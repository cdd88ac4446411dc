pub mod client;

pub use client::SparqlClient;

use async_trait::async_trait;
use kgexplorer_common::{Binding, CandidateRow, QueryExecutionError, SparqlResults};
use crate::query::AggregationQuery;

/// Sends query text to an endpoint. Implementations perform exactly one
/// attempt per call; retrying is the caller's decision.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, query: &str) -> Result<SparqlResults, QueryExecutionError>;

    /// Executes an aggregation query and converts its bindings to rows.
    async fn run(&self, query: &AggregationQuery) -> Result<Vec<CandidateRow>, QueryExecutionError> {
        let results = self.execute(query.text()).await?;
        to_candidate_rows(&results, query.label_var(), query.count_var())
    }
}

/// Maps each binding to a `CandidateRow`. A count-only query (`label_var`
/// of `None`) yields rows with an empty label.
pub fn to_candidate_rows(
    results: &SparqlResults,
    label_var: Option<&str>,
    count_var: &str,
) -> Result<Vec<CandidateRow>, QueryExecutionError> {
    results
        .bindings()
        .iter()
        .map(|binding| to_candidate_row(binding, label_var, count_var))
        .collect()
}

fn to_candidate_row(
    binding: &Binding,
    label_var: Option<&str>,
    count_var: &str,
) -> Result<CandidateRow, QueryExecutionError> {
    let label = match label_var {
        Some(var) => binding
            .get(var)
            .map(|v| v.value.clone())
            .ok_or_else(|| QueryExecutionError::MissingVariable { var: var.to_string() })?,
        None => String::new(),
    };

    let raw = binding
        .get(count_var)
        .map(|v| v.value.as_str())
        .ok_or_else(|| QueryExecutionError::MissingVariable { var: count_var.to_string() })?;
    let count = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| QueryExecutionError::InvalidCount { value: raw.to_string() })?;

    Ok(CandidateRow { label, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn results(value: serde_json::Value) -> SparqlResults {
        serde_json::from_value(value).expect("valid results")
    }

    #[test]
    fn test_rows_from_bindings() {
        let res = results(json!({
            "head": {"vars": ["type", "count"]},
            "results": {"bindings": [
                {"type": {"type": "uri", "value": "Person"}, "count": {"type": "literal", "value": "100"}},
                {"type": {"type": "uri", "value": "Place"}, "count": {"type": "literal", "value": "40"}}
            ]}
        }));
        let rows = to_candidate_rows(&res, Some("type"), "count").unwrap();
        assert_eq!(rows, vec![CandidateRow::new("Person", 100), CandidateRow::new("Place", 40)]);
    }

    #[test]
    fn test_count_only_row() {
        let res = results(json!({"results": {"bindings": [{"count": {"value": "42"}}]}}));
        let rows = to_candidate_rows(&res, None, "count").unwrap();
        assert_eq!(rows, vec![CandidateRow::new("", 42)]);
    }

    #[test]
    fn test_missing_label_variable() {
        let res = results(json!({"results": {"bindings": [{"count": {"value": "1"}}]}}));
        let err = to_candidate_rows(&res, Some("type"), "count").unwrap_err();
        assert!(matches!(err, QueryExecutionError::MissingVariable { ref var } if var == "type"));
    }

    #[test]
    fn test_negative_count_rejected() {
        let res = results(json!({"results": {"bindings": [
            {"value": {"value": "Bach"}, "count": {"value": "-3"}}
        ]}}));
        let err = to_candidate_rows(&res, Some("value"), "count").unwrap_err();
        assert!(matches!(err, QueryExecutionError::InvalidCount { .. }));
    }
}
