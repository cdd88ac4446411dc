//! Three-stage exploration: type -> property -> values.
//!
//! After every property/value cycle, completed or abandoned, control returns
//! to type selection. Only leaving type selection ends the session.

use kgexplorer_common::config::{AppConfig, ExportFormat};
use std::path::PathBuf;
use std::sync::Arc;
use crate::cache::ResultCache;
use crate::console::Console;
use crate::export;
use crate::query::{templates, AggregationQuery};
use crate::selection::{self, confirm, display_candidates, prompt_bounded_integer, select_candidate};
use crate::sparql::QueryExecutor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    AwaitingType,
    AwaitingProperty { type_uri: String },
    AwaitingValueAction { type_uri: String, property_uri: String },
    Done,
}

/// One exploration session. Owns its result cache.
pub struct Explorer {
    cache: ResultCache,
    prefixes: String,
    fallback_bound: u64,
    value_limit: u64,
    results_dir: PathBuf,
    export_format: ExportFormat,
}

impl Explorer {
    pub fn new(executor: Arc<dyn QueryExecutor>, config: &AppConfig) -> Self {
        Self {
            cache: ResultCache::with_enabled(executor, config.explorer.cache_enabled),
            prefixes: config.explorer.prefixes.clone(),
            fallback_bound: config.fallback_bound(),
            value_limit: config.explorer.value_limit.max(1),
            results_dir: PathBuf::from(&config.export.results_dir),
            export_format: config.export.format,
        }
    }

    /// Runs from type selection until the user leaves it.
    pub async fn run(&self, console: &mut dyn Console) {
        tracing::info!("Welcome to the Knowledge Graph Explorer!");
        let mut state = PipelineState::AwaitingType;
        while state != PipelineState::Done {
            state = self.step(state, console).await;
        }
        console.write_line("Exiting.");
    }

    pub async fn step(&self, state: PipelineState, console: &mut dyn Console) -> PipelineState {
        match state {
            PipelineState::AwaitingType => match self.select_type(console).await {
                Some(type_uri) => PipelineState::AwaitingProperty { type_uri },
                None => {
                    tracing::info!("No type selected. Exiting application.");
                    PipelineState::Done
                }
            },
            PipelineState::AwaitingProperty { type_uri } => {
                match self.select_property(&type_uri, console).await {
                    Some(property_uri) => PipelineState::AwaitingValueAction { type_uri, property_uri },
                    None => {
                        tracing::info!("No property selected. Returning to type selection.");
                        PipelineState::AwaitingType
                    }
                }
            }
            PipelineState::AwaitingValueAction { type_uri, property_uri } => {
                self.handle_values(&type_uri, &property_uri, console).await;
                tracing::info!("Returning to type selection.");
                PipelineState::AwaitingType
            }
            PipelineState::Done => PipelineState::Done,
        }
    }

    async fn select_type(&self, console: &mut dyn Console) -> Option<String> {
        tracing::info!("Starting type selection step.");
        let bound = self.resolve_bound(templates::build_type_count_query()).await;
        let limit = prompt_bounded_integer(console, bound, "Enter the number of types to fetch")?;
        self.fetch_and_select(templates::build_types_query(limit), templates::TYPE_VAR, console)
            .await
    }

    async fn select_property(&self, type_uri: &str, console: &mut dyn Console) -> Option<String> {
        tracing::info!("Starting property selection step for type: {}.", type_uri);
        let bound = self
            .resolve_bound(templates::build_property_count_query(type_uri))
            .await;
        let limit = prompt_bounded_integer(console, bound, "Enter the number of properties to fetch")?;
        self.fetch_and_select(
            templates::build_properties_query(type_uri, limit),
            templates::PROPERTY_VAR,
            console,
        )
        .await
    }

    async fn handle_values(&self, type_uri: &str, property_uri: &str, console: &mut dyn Console) {
        tracing::info!("Fetching values for property: {}.", property_uri);
        let query = self.prepare(templates::build_values_query(type_uri, property_uri, self.value_limit));

        let values = match self.cache.get_or_fetch(&query).await {
            Ok(values) => values,
            Err(e) => {
                tracing::error!("Failed to fetch values for property '{}': {}", property_uri, e);
                return;
            }
        };

        if values.is_empty() {
            tracing::warn!("No values found for property: {}.", property_uri);
            console.write_line(&format!("No values found for property: {}.", property_uri));
            return;
        }

        display_candidates(console, &values, templates::VALUE_VAR);

        if confirm(console, "Do you want to export the results?") {
            tracing::info!("Exporting results.");
            match export::export_rows(&values, &self.results_dir, self.export_format) {
                Ok(path) => console.write_line(&format!("Results exported to {}", path.display())),
                Err(e) => tracing::error!("{:#}", e),
            }
        }
    }

    async fn fetch_and_select(
        &self,
        query: AggregationQuery,
        key: &str,
        console: &mut dyn Console,
    ) -> Option<String> {
        let query = self.prepare(query);
        match self.cache.get_or_fetch(&query).await {
            Ok(rows) if rows.is_empty() => {
                tracing::warn!("No results found for key '{}'.", key);
                None
            }
            Ok(rows) => select_candidate(console, &rows, key),
            Err(e) => {
                tracing::error!("Error during fetch and select for key '{}': {}", key, e);
                None
            }
        }
    }

    async fn resolve_bound(&self, count_query: AggregationQuery) -> u64 {
        let count_query = self.prepare(count_query);
        selection::resolve_bound_or(self.cache.get_or_fetch(&count_query).await, self.fallback_bound)
    }

    fn prepare(&self, query: AggregationQuery) -> AggregationQuery {
        query.with_prefixes(&self.prefixes)
    }
}
