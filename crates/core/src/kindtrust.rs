use crate::{error::InvocationError, registry::OrganizationRegistry, Organization};
use alloy::{primitives::Address, providers::DynProvider, rpc::types::TransactionReceipt, sol};
use async_trait::async_trait;
use tracing::{debug, info, warn};

sol! {
    #[sol(rpc)]
    contract KindTrust {
        function addOrganization(string name, string imageHash, string descriptionHash) external;
    }
}

pub const CONTRACT_NAME: &str = "KindTrust";

/// A `KindTrust` deployment reachable through a signing provider.
pub struct KindTrustInstance {
    contract: KindTrust::KindTrustInstance<DynProvider>,
    gas_limit: Option<u64>,
}

impl KindTrustInstance {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            contract: KindTrust::new(address, provider),
            gas_limit: None,
        }
    }

    /// Send with a fixed gas limit instead of estimating it.
    pub fn with_gas_limit(mut self, gas_limit: Option<u64>) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    pub fn address(&self) -> Address {
        *self.contract.address()
    }
}

#[async_trait]
impl OrganizationRegistry for KindTrustInstance {
    type Receipt = TransactionReceipt;

    async fn add_organization(
        &self,
        organization: &Organization,
    ) -> Result<TransactionReceipt, InvocationError> {
        let mut call = self.contract.addOrganization(
            organization.name.to_owned(),
            organization.image_hash.to_owned(),
            organization.description_hash.to_owned(),
        );
        if let Some(gas_limit) = self.gas_limit {
            call = call.gas(gas_limit);
        }
        let pending = call.send().await?;
        let tx_hash = *pending.tx_hash();
        debug!("addOrganization sent: {tx_hash}");

        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            warn!("addOrganization reverted: {tx_hash}");
            return Err(InvocationError::Reverted { tx_hash });
        }
        info!(
            "addOrganization included in block {}",
            receipt.block_number.unwrap_or_default()
        );
        Ok(receipt)
    }
}
