mod error;
mod truffle;

pub use error::Error;
pub use truffle::{NetworkDeployment, TruffleArtifact};

pub type Result<T> = std::result::Result<T, Error>;

/// Location of the `KindTrust` artifact relative to the project root after `truffle compile`.
pub const DEFAULT_ARTIFACT_PATH: &str = "build/contracts/KindTrust.json";
