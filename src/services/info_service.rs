/// Reply to `/start`
pub fn welcome_message(wallet_address: &str) -> String {
    format!(
        "Greetings! You're in Celestial Deposits.\n\
         Wallet: {}\n\
         Celestial Token: 1,000,000 locked\n\
         Type /rank for status\n\
         Type /transactions to view recent token transfers",
        wallet_address
    )
}

/// Reply to `/rank`
pub fn rank_message() -> &'static str {
    "Captain rank.\n3 kids fed.\nBeach cleanup done.\nCharity pool: 0.5% every spin. Keep winning."
}
