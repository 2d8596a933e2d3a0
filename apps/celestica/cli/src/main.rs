//! Celestica CLI - Entry Point

#[tokio::main]
async fn main() -> eyre::Result<()> {
    celestica_cli::run().await
}
