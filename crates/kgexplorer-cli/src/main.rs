use kgexplorer_cli::bootstrap;
use kgexplorer_core::{Explorer, SparqlClient, StdConsole};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = bootstrap()?;

    let client = Arc::new(SparqlClient::from_config(&config.endpoint));
    let explorer = Explorer::new(client, &config);

    let mut console = StdConsole::new();
    explorer.run(&mut console).await;
    Ok(())
}
