// Result cache keyed by exact query text.
// Entries are never evicted or invalidated for the life of a session.

use kgexplorer_common::{CandidateRow, QueryExecutionError};
use moka::future::Cache;
use std::sync::Arc;
use crate::query::AggregationQuery;
use crate::sparql::QueryExecutor;

/// Query text -> rows of the first successful fetch.
///
/// Textually different but equivalent queries are distinct entries. Failed
/// fetches store nothing, so the next call for the same text asks the
/// executor again. Concurrent callers for one text share a single fetch.
pub struct ResultCache {
    executor: Arc<dyn QueryExecutor>,
    rows: Cache<String, Vec<CandidateRow>>,
    enabled: bool,
}

impl ResultCache {
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self::with_enabled(executor, true)
    }

    /// With `enabled == false` every call goes to the executor.
    pub fn with_enabled(executor: Arc<dyn QueryExecutor>, enabled: bool) -> Self {
        Self {
            executor,
            rows: Cache::builder().build(),
            enabled,
        }
    }

    pub async fn get_or_fetch(&self, query: &AggregationQuery) -> Result<Vec<CandidateRow>, QueryExecutionError> {
        if !self.enabled {
            return self.executor.run(query).await;
        }

        if let Some(rows) = self.rows.get(query.text()).await {
            tracing::debug!("Cache HIT ({} rows)", rows.len());
            return Ok(rows);
        }

        tracing::debug!("Cache MISS, fetching from endpoint");
        self.rows
            .try_get_with(query.text().to_string(), self.executor.run(query))
            .await
            .map_err(|e| (*e).clone())
    }

    pub fn contains(&self, query_text: &str) -> bool {
        self.enabled && self.rows.contains_key(query_text)
    }
}
