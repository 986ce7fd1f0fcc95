use crate::{
    error::{InvocationError, ResolutionError},
    Organization,
};
use async_trait::async_trait;

/// A deployed contract that accepts new organizations.
#[async_trait]
pub trait OrganizationRegistry {
    /// Whatever the contract call hands back on success.
    type Receipt: Send;

    async fn add_organization(
        &self,
        organization: &Organization,
    ) -> Result<Self::Receipt, InvocationError>;
}

/// Looks up an already-deployed registry instance for the current target network.
#[async_trait]
pub trait ResolveDeployment {
    type Instance: OrganizationRegistry + Send + Sync;

    async fn resolve(&self) -> Result<Self::Instance, ResolutionError>;
}
