// Aggregation query model and SPARQL templates

pub mod templates;

pub use templates::{
    build_properties_query, build_property_count_query, build_type_count_query,
    build_types_query, build_values_query,
};

use std::fmt;

/// A fully substituted aggregation query and the result variables that map
/// each of its bindings to a `CandidateRow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationQuery {
    text: String,
    label_var: Option<&'static str>,
    count_var: &'static str,
}

impl AggregationQuery {
    pub fn new(text: String, label_var: Option<&'static str>, count_var: &'static str) -> Self {
        Self {
            text,
            label_var,
            count_var,
        }
    }

    /// Prepends a PREFIX preamble. Empty preambles leave the text untouched.
    pub fn with_prefixes(mut self, prefixes: &str) -> Self {
        let prefixes = prefixes.trim();
        if !prefixes.is_empty() {
            self.text = format!("{}\n\n{}", prefixes, self.text);
        }
        self
    }

    /// The exact query text; also the cache key.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `None` for count-only queries.
    pub fn label_var(&self) -> Option<&'static str> {
        self.label_var
    }

    pub fn count_var(&self) -> &'static str {
        self.count_var
    }
}

impl fmt::Display for AggregationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
