pub mod start;
pub mod rank;
pub mod transactions;

use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::{debug, error};

/// Commands the bot answers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Rank,
    Transactions,
}

impl Command {
    const ALL: [Command; 3] = [Command::Start, Command::Rank, Command::Transactions];

    /// Every command whose pattern appears anywhere in the message, in fixed order.
    /// `/start@CelestialBot` and `hi /transactions` both match.
    pub fn matches(content: &str) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|command| content.contains(command.name()))
            .collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "/start",
            Command::Rank => "/rank",
            Command::Transactions => "/transactions",
        }
    }
}

pub async fn handle_message(ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    for command in Command::matches(&msg.content) {
        debug!("Dispatching {} from {} in channel {}", command.name(), msg.author.id, msg.channel_id);

        let result = match command {
            Command::Start => start::execute(ctx, msg).await,
            Command::Rank => rank::execute(ctx, msg).await,
            Command::Transactions => transactions::execute(ctx, msg).await,
        };

        if let Err(e) = result {
            error!("❌ Error executing command {}: {}", command.name(), e);
        }
    }
}
