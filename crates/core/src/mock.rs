//! In-memory stand-ins for the deployment, the registry contract and the output sink.

use crate::{
    error::{InvocationError, OutputError, ResolutionError},
    registry::{OrganizationRegistry, ResolveDeployment},
    sink::ReceiptSink,
    Organization,
};
use alloy::primitives::TxHash;
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

/// Returned by [`MockRegistry`] for every accepted call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockReceipt {
    /// Zero-based index of the call that produced this receipt.
    pub call_index: usize,
    pub organization: Organization,
}

/// Records every `add_organization` call; optionally rejects all of them.
#[derive(Clone, Debug, Default)]
pub struct MockRegistry {
    calls: Arc<Mutex<Vec<Organization>>>,
    revert: bool,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry whose calls all revert.
    pub fn reverting() -> Self {
        Self {
            revert: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Organization> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn num_calls(&self) -> usize {
        self.calls().len()
    }
}

#[async_trait]
impl OrganizationRegistry for MockRegistry {
    type Receipt = MockReceipt;

    async fn add_organization(
        &self,
        organization: &Organization,
    ) -> Result<MockReceipt, InvocationError> {
        let call_index = {
            let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
            calls.push(organization.clone());
            calls.len() - 1
        };
        if self.revert {
            return Err(InvocationError::Reverted {
                tx_hash: TxHash::repeat_byte(0xab),
            });
        }
        Ok(MockReceipt {
            call_index,
            organization: organization.clone(),
        })
    }
}

/// Hands out a shared [`MockRegistry`], or fails as if nothing was deployed.
#[derive(Clone, Debug, Default)]
pub struct MockDeployment {
    registry: Option<MockRegistry>,
    resolutions: Arc<AtomicUsize>,
}

impl MockDeployment {
    pub fn new(registry: MockRegistry) -> Self {
        Self {
            registry: Some(registry),
            resolutions: Default::default(),
        }
    }

    pub fn undeployed() -> Self {
        Self::default()
    }

    pub fn num_resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResolveDeployment for MockDeployment {
    type Instance = MockRegistry;

    async fn resolve(&self) -> Result<MockRegistry, ResolutionError> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        self.registry
            .clone()
            .ok_or_else(|| ResolutionError::NotDeployed {
                contract: "KindTrust".to_owned(),
                network_id: 5777,
            })
    }
}

/// Keeps every forwarded receipt.
#[derive(Debug)]
pub struct RecordingSink<R> {
    pub receipts: Vec<R>,
}

impl<R> Default for RecordingSink<R> {
    fn default() -> Self {
        Self { receipts: vec![] }
    }
}

impl<R> ReceiptSink<R> for RecordingSink<R> {
    fn forward(&mut self, receipt: R) -> Result<(), OutputError> {
        self.receipts.push(receipt);
        Ok(())
    }
}
