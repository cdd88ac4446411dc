//! Named SPARQL queries loaded from a JSON or TOML document:
//!
//! ```json
//! { "prefixes": "PREFIX schema: <http://schema.org/>",
//!   "queries": { "count_persons": "SELECT (COUNT(?s) AS ?n) WHERE { ?s a schema:Person }" } }
//! ```

use kgexplorer_common::CatalogError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
struct QueryDocument {
    #[serde(default)]
    prefixes: String,
    queries: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct QueryCatalog {
    document: QueryDocument,
}

impl QueryCatalog {
    /// Reads and parses the document once; `.toml` files are parsed as TOML,
    /// everything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();
        let load_err = |reason: String| CatalogError::Load {
            path: path.clone(),
            reason,
        };

        tracing::info!("Loading SPARQL queries from {}", path.display());
        let raw = fs::read_to_string(&path).map_err(|e| load_err(e.to_string()))?;

        let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");
        let document: QueryDocument = if is_toml {
            toml::from_str(&raw).map_err(|e| load_err(e.to_string()))?
        } else {
            serde_json::from_str(&raw).map_err(|e| load_err(e.to_string()))?
        };

        tracing::info!("Loaded {} queries", document.queries.len());
        Ok(Self { document })
    }

    pub fn prefixes(&self) -> &str {
        &self.document.prefixes
    }

    /// Query names in sorted order.
    pub fn list_queries(&self) -> Vec<String> {
        self.document.queries.keys().cloned().collect()
    }

    /// `prefixes + "\n\n" + body`.
    pub fn get_query(&self, name: &str) -> Result<String, CatalogError> {
        let body = self.document.queries.get(name).ok_or_else(|| {
            tracing::error!("Query '{}' not found.", name);
            CatalogError::QueryNotFound { name: name.to_string() }
        })?;
        tracing::debug!("Retrieved query: {}", name);
        Ok(format!("{}\n\n{}", self.document.prefixes, body))
    }
}

/// Regular files directly inside `dir`, sorted by name.
pub fn list_query_files(dir: impl AsRef<Path>) -> std::io::Result<Vec<String>> {
    let dir = dir.as_ref();
    tracing::info!("Listing files in directory: {}", dir.display());
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    files.sort();
    Ok(files)
}
