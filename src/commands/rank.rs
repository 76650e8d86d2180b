use serenity::model::channel::Message;
use serenity::prelude::Context;
use crate::services::info_service;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    msg.channel_id
        .say(ctx, info_service::rank_message())
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
