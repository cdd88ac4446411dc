use kgexplorer_cli::{bootstrap, run_named_query};
use kgexplorer_core::{SparqlClient, StdConsole};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = bootstrap()?;
    let client = SparqlClient::from_config(&config.endpoint);
    let mut console = StdConsole::new();

    if let Err(e) = run_named_query(&config, &client, &mut console).await {
        tracing::error!("Critical error in main execution: {:#}", e);
        return Err(e);
    }
    Ok(())
}
