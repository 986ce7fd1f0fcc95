use alloy::{
    contract,
    primitives::{Address, TxHash},
    providers::PendingTransactionError,
    transports::{RpcError, TransportErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to resolve deployed contract")]
    Resolution(#[from] ResolutionError),

    #[error("addOrganization call failed")]
    Invocation(#[from] InvocationError),

    #[error("failed to write receipt")]
    Output(#[from] OutputError),
}

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("artifact error")]
    Artifact(#[from] kindtrust_artifacts::Error),

    #[error("artifact describes {found}, expected {expected}")]
    WrongContract { expected: String, found: String },

    #[error("failed to detect network")]
    NetworkDetection(#[source] RpcError<TransportErrorKind>),

    #[error("{contract} has not been deployed to detected network (network id {network_id})")]
    NotDeployed { contract: String, network_id: u64 },

    #[error("no contract code found at {address} for {contract}")]
    NoCode { contract: String, address: Address },

    #[error("failed to fetch code at {address}")]
    CodeLookup {
        address: Address,
        #[source]
        source: RpcError<TransportErrorKind>,
    },
}

#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("failed to send transaction")]
    Send(#[from] contract::Error),

    #[error("failed to get transaction receipt")]
    Receipt(#[from] PendingTransactionError),

    #[error("transaction {tx_hash} reverted")]
    Reverted { tx_hash: TxHash },
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to serialize receipt")]
    Serialize(#[from] serde_json::Error),

    #[error("io error")]
    Io(#[from] std::io::Error),
}
