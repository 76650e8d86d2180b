use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::{info, warn, error};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod server;
mod services;

use api::etherscan::EtherscanClient;
use config::Config;

struct Handler;

struct BotConfig;

impl TypeMapKey for BotConfig {
    type Value = Arc<Config>;
}

struct Etherscan;

impl TypeMapKey for Etherscan {
    type Value = EtherscanClient;
}

/// Shared configuration stored in the client data
pub(crate) async fn bot_config(ctx: &Context) -> Result<Arc<Config>, String> {
    let data = ctx.data.read().await;
    data.get::<BotConfig>()
        .cloned()
        .ok_or("Configuration not initialized".to_string())
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&ctx, &msg).await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);

        if let Err(e) = ctx.http.get_current_user().await {
            warn!("Failed to check gateway session status: {}", e);
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("celestial_bot=debug".parse().unwrap())
            .add_directive("serenity=warn".parse().unwrap()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🤖 Starting Celestial Deposits bot...");

    let config = match Config::from_env() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    info!("Watching wallet {} on chain {}", config.wallet_address, config.chain_id);

    let listener = match server::bind(config.port).await {
        Ok(l) => l,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    tokio::spawn(server::serve(listener));

    let etherscan = EtherscanClient::new(&config);

    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES;

    let mut client = match Client::builder(&config.bot_token, intents)
        .event_handler(Handler)
        .await
    {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create client: {}", e);
            std::process::exit(1);
        }
    };

    {
        let mut data = client.data.write().await;
        data.insert::<BotConfig>(Arc::clone(&config));
        data.insert::<Etherscan>(etherscan);
    }

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }
}
