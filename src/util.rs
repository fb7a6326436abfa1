use std::future::Future;

use serenity::{
    all::{
        CommandDataOption, CommandDataOptionValue, CommandInteraction, CreateAllowedMentions,
        CreateInteractionResponse, CreateInteractionResponseFollowup,
        CreateInteractionResponseMessage, EditInteractionResponse, Http,
    },
    async_trait,
};

pub fn get_value<'a>(
    options: &'a [CommandDataOption],
    name: &'a str,
) -> Option<&'a CommandDataOptionValue> {
    options.iter().find(|v| v.name == name).map(|v| &v.value)
}

pub fn value_to_string(v: &CommandDataOptionValue) -> Option<String> {
    match v {
        CommandDataOptionValue::String(v) => Some(v.clone()),
        _ => None,
    }
}

/// Replies longer than this are split across several messages; Discord
/// rejects anything over [DISCORD_MESSAGE_LIMIT] characters outright.
pub const MESSAGE_CHUNK_SIZE: usize = 1500;
const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Splits a reply into message-sized chunks, on word boundaries wherever
/// possible.
pub fn chunk_message(text: &str) -> Vec<String> {
    let mut chunks: Vec<String> = vec![];

    for word in text.split(' ') {
        match chunks.last_mut() {
            Some(last)
                if last.len() <= MESSAGE_CHUNK_SIZE
                    && last.len() + 1 + word.len() < DISCORD_MESSAGE_LIMIT =>
            {
                last.push(' ');
                last.push_str(word);
            }
            _ => chunks.extend(split_oversized(word)),
        }
    }

    chunks
}

/// A single space-free token can outgrow a whole message; split it on char
/// boundaries as a last resort.
fn split_oversized(word: &str) -> Vec<String> {
    if word.len() < DISCORD_MESSAGE_LIMIT {
        return vec![word.to_owned()];
    }

    let mut pieces: Vec<String> = vec![];
    let mut piece = String::new();
    for ch in word.chars() {
        if piece.len() + ch.len_utf8() >= DISCORD_MESSAGE_LIMIT {
            pieces.push(std::mem::take(&mut piece));
        }
        piece.push(ch);
    }
    pieces.push(piece);

    pieces
}

/// The subset of the interaction surface the bot uses, behind a trait so
/// handlers can be tested against a recording fake.
#[async_trait]
pub trait RespondableInteraction: Send + Sync {
    /// Sends the initial response, visible to the whole channel.
    async fn create(&self, http: &Http, message: &str) -> anyhow::Result<()>;
    /// Sends the initial response, visible only to the invoking user.
    async fn create_private(&self, http: &Http, message: &str) -> anyhow::Result<()>;
    /// Acknowledges the interaction with a deferred placeholder. Must happen
    /// before any slow work or Discord invalidates the interaction.
    async fn acknowledge(&self, http: &Http) -> anyhow::Result<()>;
    /// Sends the real content after an acknowledgement.
    async fn follow_up(&self, http: &Http, message: &str) -> anyhow::Result<()>;
    async fn create_or_edit(&self, http: &Http, message: &str) -> anyhow::Result<()>;
}

#[async_trait]
impl RespondableInteraction for CommandInteraction {
    async fn create(&self, http: &Http, message: &str) -> anyhow::Result<()> {
        Ok(self
            .create_response(
                http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new().content(message),
                ),
            )
            .await?)
    }
    async fn create_private(&self, http: &Http, message: &str) -> anyhow::Result<()> {
        Ok(self
            .create_response(
                http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .content(message)
                        .ephemeral(true),
                ),
            )
            .await?)
    }
    async fn acknowledge(&self, http: &Http) -> anyhow::Result<()> {
        Ok(self.defer(http).await?)
    }
    async fn follow_up(&self, http: &Http, message: &str) -> anyhow::Result<()> {
        for chunk in chunk_message(message) {
            self.create_followup(
                http,
                CreateInteractionResponseFollowup::new()
                    .content(chunk)
                    .allowed_mentions(CreateAllowedMentions::new()),
            )
            .await?;
        }
        Ok(())
    }
    async fn create_or_edit(&self, http: &Http, message: &str) -> anyhow::Result<()> {
        if self.get_response(http).await.is_ok() {
            self.edit_response(http, EditInteractionResponse::new().content(message))
                .await?;
        } else {
            self.create(http, message).await?;
        }
        Ok(())
    }
}

/// Runs the [body] and edits the interaction response if an error occurs.
pub async fn run_and_report_error(
    interaction: &dyn RespondableInteraction,
    http: &Http,
    body: impl Future<Output = anyhow::Result<()>>,
) {
    if let Err(err) = body.await {
        if let Err(send_err) = interaction
            .create_or_edit(http, &format!("Error: {err}"))
            .await
        {
            eprintln!("Failed to report interaction error: {send_err:?}");
        }
    }
}
