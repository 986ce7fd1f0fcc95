use kindtrust_core::error::{InvocationError, OutputError, ResolutionError};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("failed to resolve deployed contract")]
    #[diagnostic(help("check that the contract was deployed to the network behind the RPC URL"))]
    Resolution(#[source] ResolutionError),

    #[error("addOrganization call failed")]
    Invocation(#[source] InvocationError),

    #[error("failed to write receipt")]
    Output(#[source] OutputError),

    #[error("invalid RPC URL: {0}")]
    InvalidRpcUrl(#[from] url::ParseError),

    #[error("invalid private key")]
    InvalidPrivateKey(#[from] alloy::signers::local::LocalSignerError),
}

impl From<kindtrust_core::Error> for CliError {
    fn from(err: kindtrust_core::Error) -> Self {
        use kindtrust_core::Error::*;
        match err {
            Resolution(e) => Self::Resolution(e),
            Invocation(e) => Self::Invocation(e),
            Output(e) => Self::Output(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::TxHash;

    #[test]
    fn deployment_hint_only_for_resolution_errors() {
        let resolution = CliError::from(kindtrust_core::Error::Resolution(
            ResolutionError::NotDeployed {
                contract: "KindTrust".to_owned(),
                network_id: 5777,
            },
        ));
        assert!(resolution.help().is_some());

        let invocation = CliError::from(kindtrust_core::Error::Invocation(
            InvocationError::Reverted {
                tx_hash: TxHash::ZERO,
            },
        ));
        assert!(matches!(invocation, CliError::Invocation(_)));
        assert!(invocation.help().is_none());

        let output = CliError::from(kindtrust_core::Error::Output(OutputError::Io(
            std::io::ErrorKind::BrokenPipe.into(),
        )));
        assert!(output.help().is_none());
    }
}
