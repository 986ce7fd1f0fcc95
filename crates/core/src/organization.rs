use serde::{Deserialize, Serialize};

/// IPFS hash of `KindTrust.jpg`.
pub const CHARITY_IMAGE_HASH: &str = "QmSQH5xm4i1QAKTDuBuEYFW6EUomb1WPBY4zXmxXJXCZsj";
/// IPFS hash of `SampleDescription.txt`.
pub const CHARITY_DESCRIPTION_HASH: &str = "QmUJ9fH9wuDQCvymLo7K7kmzP41mTzXoxmR6XEzG1WsxmW";

/// An organization as submitted to the registry contract.
///
/// The hashes are passed through untouched; the contract decides what is valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub image_hash: String,
    pub description_hash: String,
}

impl Organization {
    pub fn new(
        name: impl Into<String>,
        image_hash: impl Into<String>,
        description_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image_hash: image_hash.into(),
            description_hash: description_hash.into(),
        }
    }

    /// The sample organization seeded into a fresh deployment.
    pub fn charity() -> Self {
        Self::new("Charity", CHARITY_IMAGE_HASH, CHARITY_DESCRIPTION_HASH)
    }
}

impl Default for Organization {
    fn default() -> Self {
        Self::charity()
    }
}
