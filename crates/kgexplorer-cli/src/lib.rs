use anyhow::{Context, Result};
use kgexplorer_common::config::AppConfig;
use kgexplorer_core::catalog::{list_query_files, QueryCatalog};
use kgexplorer_core::selection::select_from_list;
use kgexplorer_core::table::render_preview;
use kgexplorer_core::{Console, QueryExecutor};
use std::path::Path;

/// Logging to stderr, `.env`, then layered configuration.
pub fn bootstrap() -> Result<AppConfig> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!("Loaded .env from: {:?}", path),
        Err(e) => tracing::debug!("No .env file loaded: {}", e),
    }

    let config = AppConfig::load().context("Failed to load configuration")?;
    tracing::info!("Using SPARQL endpoint: {}", config.endpoint.url);
    Ok(config)
}

/// Named-query mode: pick a query file, pick a query, run it and print a
/// preview. Catalog failures are fatal; endpoint failures are logged.
pub async fn run_named_query(
    config: &AppConfig,
    executor: &dyn QueryExecutor,
    console: &mut dyn Console,
) -> Result<()> {
    let dir = Path::new(&config.queries.directory);
    let files = list_query_files(dir)
        .with_context(|| format!("Error listing files in directory '{}'", dir.display()))?;
    let Some(file) = select_from_list(console, &files, "Select a query file: ")? else {
        return Ok(());
    };
    let path = dir.join(file);
    tracing::info!("Using query file: {}", path.display());

    let catalog = QueryCatalog::load(&path)?;
    let Some(name) = select_from_list(console, &catalog.list_queries(), "Select a query by number: ")? else {
        return Ok(());
    };
    let query = catalog.get_query(&name)?;
    tracing::info!("Selected query: {}", name);

    let results = match executor.execute(&query).await {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("An error occurred during query execution: {}", e);
            return Ok(());
        }
    };

    if results.is_empty() {
        tracing::warn!("Query returned no results.");
        return Ok(());
    }

    console.write_line("\nQuery Results Preview:");
    console.write_line(&render_preview(&results, config.queries.preview_rows));
    Ok(())
}
