use std::sync::Arc;

use anyhow::Context as AnyhowContext;
use serenity::{Client, all::GatewayIntents};

mod ai;
mod commands;
mod config;
mod constant;
mod handler;
mod util;

use config::Configuration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Configuration::load()?;

    let ai = Arc::new(ai::Ai::new(&config));

    let mut client = Client::builder(&config.discord_token, GatewayIntents::default())
        .event_handler(handler::Handler::new(ai))
        .await
        .context("Error creating client")?;

    if let Err(why) = client.start().await {
        println!("Client error: {why:?}");
    }

    Ok(())
}
