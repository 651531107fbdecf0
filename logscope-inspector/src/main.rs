use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    logscope_inspector::run().await?;
    Ok(())
}
