use alloy::signers::local::PrivateKeySigner;
use nu_ansi_term::{AnsiGenericString, Style};
use std::str::FromStr;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// First account of the deterministic development mnemonic used by ganache and anvil.
pub const DEFAULT_PRV_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn get_signer_with_default(private_key: Option<&str>) -> Result<PrivateKeySigner, CliError> {
    let key = match private_key {
        Some(key) => key,
        None => {
            warn!("No private key provided. Using default private key.");
            DEFAULT_PRV_KEY
        }
    };
    Ok(PrivateKeySigner::from_str(key)?)
}

pub fn bold<'a>(msg: impl AsRef<str> + 'a) -> AnsiGenericString<'a, str> {
    Style::new().bold().paint(msg.as_ref().to_owned())
}
