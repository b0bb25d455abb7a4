use anyhow::Result;

use sehat_triage::app;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
