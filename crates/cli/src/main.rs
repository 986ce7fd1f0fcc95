mod commands;
mod error;
mod util;

use commands::KindTrustCli;
use error::CliError;

#[tokio::main]
async fn main() -> miette::Result<()> {
    util::init_tracing();
    run().await?;
    Ok(())
}

async fn run() -> Result<(), CliError> {
    let args = KindTrustCli::parse_args();
    commands::seed(args.seed).await
}
