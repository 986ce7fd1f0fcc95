use crate::{Error, Result};
use alloy::primitives::{Address, TxHash};
use serde::Deserialize;
use std::{collections::HashMap, fs::read, path::Path};
use tracing::debug;

/// A deployment recorded in an artifact's `networks` map.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDeployment {
    pub address: Address,
    pub transaction_hash: Option<TxHash>,
}

/// Subset of a Truffle build artifact (`build/contracts/<Name>.json`).
///
/// Only the fields needed to locate a deployment are read; everything else
/// in the file (abi, bytecode, source maps, ...) is ignored.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruffleArtifact {
    pub contract_name: String,
    /// Deployments keyed by the decimal network id reported by `net_version`.
    #[serde(default)]
    pub networks: HashMap<String, NetworkDeployment>,
}

impl TruffleArtifact {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading artifact from {}", path.display());
        let contents = read(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_slice(&contents).map_err(|source| Error::Json {
            path: path.to_owned(),
            source,
        })
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the deployment recorded for `network_id`, if any.
    pub fn deployment(&self, network_id: u64) -> Option<&NetworkDeployment> {
        self.networks.get(&network_id.to_string())
    }

    pub fn deployed_address(&self, network_id: u64) -> Option<Address> {
        self.deployment(network_id).map(|d| d.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/KindTrust.json");

    #[test]
    fn reads_deployment_for_known_network() {
        let artifact = TruffleArtifact::from_file(FIXTURE).unwrap();
        assert_eq!(artifact.contract_name, "KindTrust");

        let deployment = artifact.deployment(5777).unwrap();
        assert_eq!(
            deployment.address,
            "0x345ca3e014aaf5dca488057592ee47305d9b3e10"
                .parse::<Address>()
                .unwrap()
        );
        assert!(deployment.transaction_hash.is_some());
    }

    #[test]
    fn unknown_network_has_no_deployment() {
        let artifact = TruffleArtifact::from_file(FIXTURE).unwrap();
        assert!(artifact.deployed_address(1).is_none());
        assert!(artifact.deployed_address(31337).is_none());
    }

    #[test]
    fn artifact_without_networks_is_undeployed() {
        let artifact = TruffleArtifact::from_json(r#"{ "contractName": "KindTrust" }"#).unwrap();
        assert!(artifact.networks.is_empty());
        assert!(artifact.deployed_address(5777).is_none());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("KindTrust.json");
        let err = TruffleArtifact::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn malformed_address_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "contractName": "KindTrust", "networks": {{ "5777": {{ "address": "0xnope" }} }} }}"#
        )
        .unwrap();
        let err = TruffleArtifact::from_file(file.path()).unwrap_err();
        match err {
            Error::Json { path, .. } => assert_eq!(path, file.path()),
            other => panic!("expected Error::Json, got {other:?}"),
        }
    }
}
