pub mod query;
pub mod sparql;
pub mod cache;
pub mod console;
pub mod selection;
pub mod explorer;
pub mod export;
pub mod catalog;
pub mod table;

pub use cache::ResultCache;
pub use catalog::QueryCatalog;
pub use console::{Console, StdConsole};
pub use explorer::{Explorer, PipelineState};
pub use query::AggregationQuery;
pub use sparql::{QueryExecutor, SparqlClient};

// Re-export common types for convenience
pub use kgexplorer_common::{CandidateRow, QueryExecutionError, SparqlResults};
