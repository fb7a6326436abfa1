use std::{collections::HashSet, sync::Arc};

use serenity::all::{Command, Context, EventHandler, Http, Interaction, Ready};

use crate::{
    ai::TextGenerator,
    commands::{self, CommandHandler},
    util,
};

pub struct Handler {
    command_handlers: Vec<Box<dyn CommandHandler>>,
}
impl Handler {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            command_handlers: vec![
                Box::new(commands::ping::Handler),
                Box::new(commands::assistant::Handler::new(generator)),
            ],
        }
    }
}
#[serenity::async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        println!("{} is connected; registering commands...", ready.user.name);

        if let Err(err) = register_commands(&ctx.http, &self.command_handlers).await {
            println!("Error while registering commands: `{err}`");
            std::process::exit(1);
        }

        println!("{} is good to go!", ready.user.name);
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(cmd) = interaction else {
            return;
        };

        if let Some(handler) = self
            .command_handlers
            .iter()
            .find(|h| h.can_handle_command(&cmd))
        {
            util::run_and_report_error(&cmd, &ctx.http, handler.run(&ctx.http, &cmd)).await;
        }
    }
}

async fn register_commands(
    http: &Http,
    handlers: &[Box<dyn CommandHandler>],
) -> anyhow::Result<()> {
    let registered_commands = Command::get_global_commands(http).await?;
    let registered_commands: HashSet<_> = registered_commands
        .iter()
        .map(|c| c.name.as_str())
        .collect();

    let our_commands: Vec<String> = handlers
        .iter()
        .flat_map(|h| h.registerable_commands())
        .collect();
    let our_commands: HashSet<_> = our_commands.iter().map(|s| s.as_str()).collect();

    if registered_commands != our_commands {
        // If the commands registered with Discord don't match the commands
        // this bot exposes, reset them entirely before re-registering.
        Command::set_global_commands(http, vec![]).await?;
    }

    for handler in handlers {
        handler.register(http).await?;
    }

    Ok(())
}
