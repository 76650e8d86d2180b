pub mod info_service;
pub mod transaction_service;
