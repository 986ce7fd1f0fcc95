use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder},
    rpc::client::ClientBuilder,
};
use clap::Args;
use kindtrust_core::{
    deployment::{ArtifactDeployment, DEFAULT_ARTIFACT_PATH},
    error::ResolutionError,
    provider::LoggingLayer,
    sink::JsonSink,
    Error, Seeder,
};
use std::path::PathBuf;
use tracing::{error, info};
use url::Url;

use crate::{
    error::CliError,
    util::{bold, get_signer_with_default},
};

#[derive(Args, Debug, Clone)]
pub struct SeedCliArgs {
    /// RPC URL of the node the contract is deployed on.
    #[arg(
        short,
        long,
        env = "KINDTRUST_RPC_URL",
        default_value = "http://localhost:8545"
    )]
    pub rpc_url: String,

    /// Private key used to sign the addOrganization transaction.
    #[arg(
        short,
        long,
        env = "KINDTRUST_PRIVATE_KEY",
        hide_env_values = true,
        long_help = "Private key used to sign the addOrganization transaction. Defaults to the first development account."
    )]
    pub private_key: Option<String>,

    /// Build artifact that records where the contract is deployed.
    #[arg(
        short,
        long,
        env = "KINDTRUST_ARTIFACT",
        default_value = DEFAULT_ARTIFACT_PATH
    )]
    pub artifact: PathBuf,

    /// Fixed gas limit for the addOrganization transaction. Estimated when omitted.
    #[arg(short, long, env = "KINDTRUST_GAS_LIMIT")]
    pub gas_limit: Option<u64>,
}

/// Seeds the deployed contract with the sample organization and prints the receipt to stdout.
pub async fn seed(args: SeedCliArgs) -> Result<(), CliError> {
    let url = Url::parse(&args.rpc_url)?;
    let signer = get_signer_with_default(args.private_key.as_deref())?;
    info!("sending from {}", signer.address());

    let client = ClientBuilder::default().layer(LoggingLayer).http(url);
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_client(client)
        .erased();

    let deployment =
        ArtifactDeployment::new(args.artifact, provider).with_gas_limit(args.gas_limit);
    let mut seeder = Seeder::new(deployment, JsonSink::stdout());

    seeder.run().await.inspect_err(inspect_seed_err)?;
    Ok(())
}

fn inspect_seed_err(err: &Error) {
    match err {
        Error::Resolution(ResolutionError::Artifact(e)) => {
            error!("{e}");
            eprintln!("Compile the contracts with {} first.", bold("truffle compile"));
        }
        Error::Resolution(ResolutionError::NotDeployed { .. }) => {
            eprintln!(
                "Deploy the contracts to this network with {} first.",
                bold("truffle migrate")
            );
        }
        Error::Resolution(ResolutionError::WrongContract { .. }) => {
            eprintln!("Point {} at the KindTrust artifact.", bold("--artifact"));
        }
        Error::Resolution(ResolutionError::NoCode { .. }) => {
            eprintln!(
                "The node may have been restarted since deployment. Try {}.",
                bold("truffle migrate --reset")
            );
        }
        _ => {}
    }
}
