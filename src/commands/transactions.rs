use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::error;
use crate::services::transaction_service;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    let client = {
        let data = ctx.data.read().await;
        data.get::<crate::Etherscan>()
            .ok_or("Etherscan client not initialized".to_string())?
            .clone()
    };

    let ctx = ctx.clone();
    let channel_id = msg.channel_id;
    tokio::spawn(async move {
        let fetch = transaction_service::fetch_transactions(&client);
        let send = |text: String| {
            let ctx = ctx.clone();
            async move { channel_id.say(&ctx, text).await.map(|_| ()) }
        };

        if let Err(e) = transaction_service::acknowledge_and_reply(fetch, send).await {
            error!("Failed to send transactions reply to {}: {}", channel_id, e);
        }
    });

    Ok(())
}
