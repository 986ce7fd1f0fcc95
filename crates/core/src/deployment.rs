use crate::{
    error::ResolutionError,
    kindtrust::{KindTrustInstance, CONTRACT_NAME},
    registry::ResolveDeployment,
};
use alloy::providers::{DynProvider, Provider};
use async_trait::async_trait;
use kindtrust_artifacts::TruffleArtifact;
use std::path::PathBuf;
use tracing::{debug, info};

pub use kindtrust_artifacts::DEFAULT_ARTIFACT_PATH;

/// Resolves the `KindTrust` deployment recorded in a build artifact for the
/// network the provider is connected to.
pub struct ArtifactDeployment {
    artifact_path: PathBuf,
    provider: DynProvider,
    gas_limit: Option<u64>,
}

impl ArtifactDeployment {
    pub fn new(artifact_path: impl Into<PathBuf>, provider: DynProvider) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            provider,
            gas_limit: None,
        }
    }

    /// Gas limit for the resolved instance's calls; `None` estimates.
    pub fn with_gas_limit(mut self, gas_limit: Option<u64>) -> Self {
        self.gas_limit = gas_limit;
        self
    }
}

#[async_trait]
impl ResolveDeployment for ArtifactDeployment {
    type Instance = KindTrustInstance;

    async fn resolve(&self) -> Result<KindTrustInstance, ResolutionError> {
        let artifact = TruffleArtifact::from_file(&self.artifact_path)?;
        if artifact.contract_name != CONTRACT_NAME {
            return Err(ResolutionError::WrongContract {
                expected: CONTRACT_NAME.to_owned(),
                found: artifact.contract_name,
            });
        }
        let contract = artifact.contract_name.to_owned();

        let network_id = self
            .provider
            .get_net_version()
            .await
            .map_err(ResolutionError::NetworkDetection)?;
        debug!("detected network id {network_id}");

        let address = artifact
            .deployed_address(network_id)
            .ok_or_else(|| ResolutionError::NotDeployed {
                contract: contract.to_owned(),
                network_id,
            })?;

        let code = self
            .provider
            .get_code_at(address)
            .await
            .map_err(|source| ResolutionError::CodeLookup { address, source })?;
        if code.is_empty() {
            return Err(ResolutionError::NoCode { contract, address });
        }

        info!("using {contract} at {address} (network id {network_id})");
        let instance = KindTrustInstance::new(address, self.provider.clone());
        Ok(instance.with_gas_limit(self.gas_limit))
    }
}
