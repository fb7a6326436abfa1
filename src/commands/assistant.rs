use std::sync::Arc;

use anyhow::Context as AnyhowContext;
use serenity::all::{
    Command, CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, Http,
};

use crate::{
    ai::TextGenerator,
    constant,
    util::{self, RespondableInteraction},
};

use super::CommandHandler;

/// Handles `analyze` and `ask`, the two commands that go through the
/// completion service. Both defer first: generation routinely outlasts
/// Discord's three-second response window.
pub struct Handler {
    generator: Arc<dyn TextGenerator>,
}
impl Handler {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    async fn analysis(&self, ticker: &str) -> anyhow::Result<String> {
        self.generator.generate(&analysis_prompt(ticker)).await
    }

    async fn passthrough(&self, query: &str) -> anyhow::Result<String> {
        self.generator.generate(query).await
    }
}

#[serenity::async_trait]
impl CommandHandler for Handler {
    fn registerable_commands(&self) -> Vec<String> {
        vec![
            constant::commands::ANALYZE.to_owned(),
            constant::commands::ASK.to_owned(),
        ]
    }

    async fn register(&self, http: &Http) -> anyhow::Result<()> {
        Command::create_global_command(
            http,
            CreateCommand::new(constant::commands::ANALYZE)
                .description("Analyze a ticker, e.g., /analyze TSLA")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        constant::value::TICKER,
                        "Ticker like TSLA, NVDA, SPY",
                    )
                    .required(true),
                ),
        )
        .await?;

        Command::create_global_command(
            http,
            CreateCommand::new(constant::commands::ASK)
                .description("Ask the trading assistant anything")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        constant::value::QUERY,
                        "Your question",
                    )
                    .required(true),
                ),
        )
        .await?;

        Ok(())
    }

    fn can_handle_command(&self, cmd: &CommandInteraction) -> bool {
        matches!(
            cmd.data.name.as_str(),
            constant::commands::ANALYZE | constant::commands::ASK
        )
    }

    async fn run(&self, http: &Http, cmd: &CommandInteraction) -> anyhow::Result<()> {
        cmd.acknowledge(http).await?;

        let options = &cmd.data.options;
        let answer = match cmd.data.name.as_str() {
            constant::commands::ANALYZE => {
                let ticker = util::get_value(options, constant::value::TICKER)
                    .and_then(util::value_to_string)
                    .context("no ticker specified")?;
                self.analysis(&ticker).await?
            }
            constant::commands::ASK => {
                let query = util::get_value(options, constant::value::QUERY)
                    .and_then(util::value_to_string)
                    .context("no query specified")?;
                self.passthrough(&query).await?
            }
            name => anyhow::bail!("unrecognized command `{name}`"),
        };

        cmd.follow_up(http, &answer).await
    }
}

fn analysis_prompt(ticker: &str) -> String {
    format!(
        "Analyze {ticker} with full setup: sentiment with emoji, entry, 🚫 stop-loss, 🎯 targets, key patterns and RSI/MA/volume notes."
    )
}
