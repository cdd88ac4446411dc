use comfy_table::{ContentArrangement, Table};
use kgexplorer_common::{CandidateRow, SparqlResults};
use crate::query::templates::{COUNT_VAR, VALUE_VAR};
use crate::sparql::to_candidate_rows;

/// Table of the first `max_rows` solutions, one column per head variable.
/// Unbound cells are left empty.
pub fn render_table(results: &SparqlResults, max_rows: usize) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(results.vars().iter().map(String::as_str));

    for row in 0..results.bindings().len().min(max_rows) {
        table.add_row(
            results
                .vars()
                .iter()
                .map(|var| results.value_at(row, var).unwrap_or("")),
        );
    }

    table.to_string()
}

/// Rows sorted by descending count; ties keep their original order.
pub fn sort_by_count(mut rows: Vec<CandidateRow>) -> Vec<CandidateRow> {
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Results with `?value` and `?count` columns are shown as a ranked
/// candidate list; anything else as a table preview.
pub fn render_preview(results: &SparqlResults, max_rows: usize) -> String {
    let has = |var: &str| results.vars().iter().any(|v| v == var);
    if has(VALUE_VAR) && has(COUNT_VAR) {
        match to_candidate_rows(results, Some(VALUE_VAR), COUNT_VAR) {
            Ok(rows) => {
                return sort_by_count(rows)
                    .iter()
                    .enumerate()
                    .map(|(i, row)| format!("{}: Value: {}, Count: {}", i + 1, row.label, row.count))
                    .collect::<Vec<_>>()
                    .join("\n");
            }
            Err(e) => tracing::warn!("Cannot rank results by count ({}), showing table", e),
        }
    }
    render_table(results, max_rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn results(value: serde_json::Value) -> SparqlResults {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_table_limits_rows() {
        let res = results(json!({
            "head": {"vars": ["composer", "decade"]},
            "results": {"bindings": [
                {"composer": {"value": "Bach"}, "decade": {"value": "1720"}},
                {"composer": {"value": "Mozart"}},
                {"composer": {"value": "Haydn"}, "decade": {"value": "1790"}}
            ]}
        }));

        let table = render_table(&res, 2);
        assert!(table.contains("composer"));
        assert!(table.contains("Bach"));
        assert!(table.contains("Mozart"));
        assert!(!table.contains("Haydn"));
    }

    #[test]
    fn test_value_count_results_are_ranked() {
        let res = results(json!({
            "head": {"vars": ["value", "count"]},
            "results": {"bindings": [
                {"value": {"value": "Mozart"}, "count": {"value": "3"}},
                {"value": {"value": "Bach"}, "count": {"value": "5"}}
            ]}
        }));

        assert_eq!(
            render_preview(&res, 5),
            "1: Value: Bach, Count: 5\n2: Value: Mozart, Count: 3"
        );
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let rows = sort_by_count(vec![
            CandidateRow::new("a", 1),
            CandidateRow::new("b", 2),
            CandidateRow::new("c", 1),
        ]);
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
    }
}
