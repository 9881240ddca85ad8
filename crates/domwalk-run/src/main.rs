use clap::Parser;
use domwalk_run::cli::{CliArgs, run};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("domwalk_run=info,domwalk_fetch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    run(args).await
}
