use async_trait::async_trait;
use kgexplorer_common::config::{EndpointConfig, RequestMethod, DEFAULT_ENDPOINT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use kgexplorer_common::{QueryExecutionError, SparqlResults};
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use super::QueryExecutor;

const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// SPARQL 1.1 protocol client returning JSON results.
pub struct SparqlClient {
    client: Client,
    endpoint: String,
    method: RequestMethod,
}

impl SparqlClient {
    pub fn new(endpoint: String) -> Self {
        Self::with_options(
            endpoint,
            RequestMethod::Get,
            Duration::from_secs(DEFAULT_ENDPOINT_TIMEOUT_SECS),
            DEFAULT_USER_AGENT,
        )
    }

    pub fn from_config(config: &EndpointConfig) -> Self {
        Self::with_options(
            config.url.clone(),
            config.method,
            config.timeout(),
            &config.user_agent,
        )
    }

    pub fn with_options(endpoint: String, method: RequestMethod, timeout: Duration, user_agent: &str) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint,
            method,
        }
    }
}

#[async_trait]
impl QueryExecutor for SparqlClient {
    async fn execute(&self, query: &str) -> Result<SparqlResults, QueryExecutionError> {
        tracing::info!("Executing SPARQL query against {}", self.endpoint);
        tracing::debug!("Query text:\n{}", query);

        let request = match self.method {
            RequestMethod::Get => self.client.get(&self.endpoint).query(&[("query", query)]),
            RequestMethod::Post => self.client.post(&self.endpoint).form(&[("query", query)]),
        };

        let res = request
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Query execution failed: {}", e);
                QueryExecutionError::transport(e)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(QueryExecutionError::transport)?;

        if !status.is_success() {
            tracing::error!("SPARQL endpoint returned {}", status);
            return Err(QueryExecutionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SparqlResults = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse SPARQL reply: {}", e);
            QueryExecutionError::from(e)
        })?;

        tracing::info!("Query executed successfully ({} bindings)", parsed.bindings().len());
        Ok(parsed)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
