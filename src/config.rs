//! Process-wide configuration, read once at startup

use thiserror::Error;

/// Wallet whose token transfers are relayed by `/transactions`.
/// Kept as an opaque string; it is not validated as an address.
pub const WALLET_ADDRESS: &str = "0x612aB0d44E258170D0888779207eF68318D4caC9";

/// Etherscan v2 multichain endpoint
pub const ETHERSCAN_API_BASE: &str = "https://api.etherscan.io/v2/api";

/// Ethereum mainnet
pub const CHAIN_ID: u64 = 1;

pub const DEFAULT_PORT: u16 = 3000;

const BOT_TOKEN_VAR: &str = "DISCORD_TOKEN";
const API_KEY_VAR: &str = "ETHERSCAN_API_KEY";
const PORT_VAR: &str = "PORT";

/// Configuration errors, all fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("Invalid {var} value '{value}': expected a port number")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub etherscan_api_key: String,
    pub wallet_address: String,
    pub api_base: String,
    pub chain_id: u64,
    pub port: u16,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any variable source.
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let bot_token = required(BOT_TOKEN_VAR)?;
        let etherscan_api_key = required(API_KEY_VAR)?;

        let port = match lookup(PORT_VAR).filter(|value| !value.is_empty()) {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            bot_token,
            etherscan_api_key,
            wallet_address: WALLET_ADDRESS.to_string(),
            api_base: ETHERSCAN_API_BASE.to_string(),
            chain_id: CHAIN_ID,
            port,
        })
    }
}
