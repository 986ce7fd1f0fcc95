use crate::{
    registry::{OrganizationRegistry, ResolveDeployment},
    sink::ReceiptSink,
    Organization, Result,
};
use tracing::{debug, info};

/// One-shot seeding step: resolve the deployed registry, add one organization,
/// hand the receipt to the sink.
///
/// Nothing is remembered between runs. Calling [`Seeder::run`] twice submits
/// the organization twice; rejecting duplicates is up to the contract.
pub struct Seeder<D, S> {
    deployment: D,
    sink: S,
    organization: Organization,
}

impl<D, S> Seeder<D, S>
where
    D: ResolveDeployment,
    S: ReceiptSink<<D::Instance as OrganizationRegistry>::Receipt>,
{
    /// Creates a seeder that submits [`Organization::charity`].
    pub fn new(deployment: D, sink: S) -> Self {
        Self::with_organization(deployment, sink, Organization::charity())
    }

    pub fn with_organization(deployment: D, sink: S, organization: Organization) -> Self {
        Self {
            deployment,
            sink,
            organization,
        }
    }

    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub async fn run(&mut self) -> Result<()> {
        debug!("resolving deployed registry");
        let instance = self.deployment.resolve().await?;

        info!(
            name = %self.organization.name,
            image_hash = %self.organization.image_hash,
            description_hash = %self.organization.description_hash,
            "adding organization"
        );
        let receipt = instance.add_organization(&self.organization).await?;

        self.sink.forward(receipt)?;
        Ok(())
    }
}
