mod seed;

use clap::Parser;

pub use seed::{seed, SeedCliArgs};

#[derive(Parser, Debug)]
#[command(
    name = "kindtrust-seed",
    version,
    about = "Add the sample organization to a deployed KindTrust contract."
)]
pub struct KindTrustCli {
    #[command(flatten)]
    pub seed: SeedCliArgs,
}

impl KindTrustCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use kindtrust_core::deployment::DEFAULT_ARTIFACT_PATH;
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_valid() {
        KindTrustCli::command().debug_assert();
    }

    #[test]
    fn runs_without_arguments() {
        let cli = KindTrustCli::try_parse_from(["kindtrust-seed"]).unwrap();
        // env vars may override the defaults on a developer machine
        if std::env::var_os("KINDTRUST_RPC_URL").is_none() {
            assert_eq!(cli.seed.rpc_url, "http://localhost:8545");
        }
        if std::env::var_os("KINDTRUST_ARTIFACT").is_none() {
            assert_eq!(cli.seed.artifact, PathBuf::from(DEFAULT_ARTIFACT_PATH));
        }
    }

    #[test]
    fn accepts_overrides() {
        let cli = KindTrustCli::try_parse_from([
            "kindtrust-seed",
            "--rpc-url",
            "http://127.0.0.1:7545",
            "-p",
            "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
            "--artifact",
            "out/KindTrust.json",
            "--gas-limit",
            "300000",
        ])
        .unwrap();
        assert_eq!(cli.seed.rpc_url, "http://127.0.0.1:7545");
        assert!(cli.seed.private_key.is_some());
        assert_eq!(cli.seed.artifact, PathBuf::from("out/KindTrust.json"));
        assert_eq!(cli.seed.gas_limit, Some(300_000));
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(KindTrustCli::try_parse_from(["kindtrust-seed", "Charity"]).is_err());
    }
}
