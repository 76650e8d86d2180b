pub mod client;
pub mod models;

pub use client::EtherscanClient;
pub use models::{AmountError, ApiError, FetchOutcome, TransferRecord};
