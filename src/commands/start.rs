use serenity::model::channel::Message;
use serenity::prelude::Context;
use crate::services::info_service;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    let config = crate::bot_config(ctx).await?;

    msg.channel_id
        .say(ctx, info_service::welcome_message(&config.wallet_address))
        .await
        .map_err(|e| format!("Failed to send welcome message: {}", e))?;

    Ok(())
}
