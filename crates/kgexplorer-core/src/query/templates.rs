//! SPARQL aggregation templates.
//!
//! Every grouped query orders by `DESC(?count)`, so index 1 of a result is
//! always the most frequent candidate. URIs are substituted verbatim inside
//! `<...>`; callers must pass well-formed identifiers.

use super::AggregationQuery;

pub const TYPE_VAR: &str = "type";
pub const PROPERTY_VAR: &str = "property";
pub const VALUE_VAR: &str = "value";
pub const COUNT_VAR: &str = "count";

pub fn build_types_query(limit: u64) -> AggregationQuery {
    debug_assert!(limit > 0, "limit must be positive");
    let text = format!(
        "SELECT ?type (COUNT(?s) AS ?count)\n\
         WHERE {{\n    ?s a ?type .\n}}\n\
         GROUP BY ?type\n\
         ORDER BY DESC(?count)\n\
         LIMIT {limit}\n"
    );
    AggregationQuery::new(text, Some(TYPE_VAR), COUNT_VAR)
}

pub fn build_properties_query(type_uri: &str, limit: u64) -> AggregationQuery {
    debug_assert!(limit > 0, "limit must be positive");
    let text = format!(
        "SELECT ?property (COUNT(?o) AS ?count)\n\
         WHERE {{\n    ?s a <{type_uri}> ;\n       ?property ?o .\n}}\n\
         GROUP BY ?property\n\
         ORDER BY DESC(?count)\n\
         LIMIT {limit}\n"
    );
    AggregationQuery::new(text, Some(PROPERTY_VAR), COUNT_VAR)
}

pub fn build_values_query(type_uri: &str, property_uri: &str, limit: u64) -> AggregationQuery {
    debug_assert!(limit > 0, "limit must be positive");
    let text = format!(
        "SELECT ?value (COUNT(?s) AS ?count)\n\
         WHERE {{\n    ?s a <{type_uri}> ;\n       <{property_uri}> ?value .\n}}\n\
         GROUP BY ?value\n\
         ORDER BY DESC(?count)\n\
         LIMIT {limit}\n"
    );
    AggregationQuery::new(text, Some(VALUE_VAR), COUNT_VAR)
}

/// Total number of distinct types.
pub fn build_type_count_query() -> AggregationQuery {
    let text = "SELECT (COUNT(DISTINCT ?type) AS ?count)\n\
                WHERE {\n    ?s a ?type .\n}\n"
        .to_string();
    AggregationQuery::new(text, None, COUNT_VAR)
}

/// Total number of distinct properties used by instances of `type_uri`.
pub fn build_property_count_query(type_uri: &str) -> AggregationQuery {
    let text = format!(
        "SELECT (COUNT(DISTINCT ?property) AS ?count)\n\
         WHERE {{\n    ?s a <{type_uri}> ;\n       ?property ?o .\n}}\n"
    );
    AggregationQuery::new(text, None, COUNT_VAR)
}
