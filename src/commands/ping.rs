use serenity::all::{Command, CommandInteraction, CreateCommand, Http};

use crate::{constant, util::RespondableInteraction};

use super::CommandHandler;

const PONG: &str = "pong ✅";

/// Liveness check. Answers on its own, without the completion service.
pub struct Handler;

#[serenity::async_trait]
impl CommandHandler for Handler {
    fn registerable_commands(&self) -> Vec<String> {
        vec![constant::commands::PING.to_owned()]
    }

    async fn register(&self, http: &Http) -> anyhow::Result<()> {
        Command::create_global_command(
            http,
            CreateCommand::new(constant::commands::PING).description("Check if the bot is alive"),
        )
        .await?;

        Ok(())
    }

    fn can_handle_command(&self, cmd: &CommandInteraction) -> bool {
        cmd.data.name == constant::commands::PING
    }

    async fn run(&self, http: &Http, cmd: &CommandInteraction) -> anyhow::Result<()> {
        cmd.create_private(http, PONG).await
    }
}
